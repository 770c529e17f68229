//! Browser User-Agent pool
//!
//! Each request picks one of these at random so consecutive page
//! requests do not all carry the same signature.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Realistic desktop browser identifiers
pub static USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
    "Mozilla/5.0 (Windows NT 6.1; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/604.1.38 (KHTML, like Gecko) Version/11.0 Safari/604.1.38",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:56.0) Gecko/20100101 Firefox/56.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13) AppleWebKit/604.1.38 (KHTML, like Gecko) Version/11.0 Safari/604.1.38",
];

/// Picks a User-Agent uniformly at random using the thread-local generator
pub fn random_user_agent() -> &'static str {
    pick_user_agent(&mut rand::rng())
}

/// Picks a User-Agent with a caller-supplied generator
///
/// Useful with a seeded generator when the choice has to be reproducible.
pub fn pick_user_agent<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // The pool is a non-empty constant, choose only fails on empty slices
    USER_AGENTS.choose(rng).copied().unwrap_or(USER_AGENTS[0])
}
