//! URL helper functions for Bing result pages
//!
//! Provides functions for normalizing the search term and building one
//! results-page URL per requested page.

use crate::country::country_code;
use crate::error::{Result, ScrapeError};

/// Bing search endpoint used unless the client is pointed elsewhere
pub const SEARCH_ENDPOINT: &str = "https://bing.com/search";

/// Normalizes a search term for the `q` parameter
///
/// Trims surrounding whitespace and joins the words with `+`. Each word is
/// percent-encoded on its own so the `+` separators stay query spaces.
///
/// # Example
/// ```
/// use bing_scraper_core::url::normalize_query;
/// assert_eq!(normalize_query("  rust lang "), "rust+lang");
/// assert_eq!(normalize_query("c++ tips"), "c%2B%2B+tips");
/// ```
pub fn normalize_query(query: &str) -> String {
    query
        .trim()
        .split(' ')
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}

/// Computes Bing's `first` parameter for a 0-based page index
///
/// Bing counts results from 1, so page 0 starts at 1 and page `i`
/// starts at `i * per_page + 1`.
///
/// Returns `None` if the offset does not fit in a `usize`.
///
/// # Example
/// ```
/// use bing_scraper_core::url::page_offset;
/// assert_eq!(page_offset(0, 30), Some(1));
/// assert_eq!(page_offset(1, 30), Some(31));
/// assert_eq!(page_offset(2, 30), Some(61));
/// assert_eq!(page_offset(2, usize::MAX), None);
/// ```
pub fn page_offset(page_index: usize, per_page: usize) -> Option<usize> {
    if page_index == 0 {
        return Some(1);
    }
    page_index.checked_mul(per_page)?.checked_add(1)
}

/// Builds the results-page URLs against the public Bing endpoint
///
/// # Arguments
/// * `query` - Search term as typed
/// * `country` - Code from the country table
/// * `pages` - Number of pages to build
/// * `per_page` - Results requested per page
///
/// # Errors
/// - `UnsupportedCountry` if `country` is not in the table
/// - `InvalidParameter` if a page offset overflows
///
/// # Example
/// ```
/// use bing_scraper_core::url::build_search_urls;
/// let urls = build_search_urls("github", "uk", 2, 30).unwrap();
/// assert_eq!(urls[0], "https://bing.com/search?q=github&first=1&count=30&cc=GB");
/// assert_eq!(urls[1], "https://bing.com/search?q=github&first=31&count=30&cc=GB");
/// ```
pub fn build_search_urls(
    query: &str,
    country: &str,
    pages: usize,
    per_page: usize,
) -> Result<Vec<String>> {
    build_search_urls_at(SEARCH_ENDPOINT, query, country, pages, per_page)
}

/// Builds the results-page URLs against a custom endpoint
///
/// Same as [`build_search_urls`] with the endpoint made explicit.
pub fn build_search_urls_at(
    endpoint: &str,
    query: &str,
    country: &str,
    pages: usize,
    per_page: usize,
) -> Result<Vec<String>> {
    let cc = country_code(country)
        .ok_or_else(|| ScrapeError::UnsupportedCountry(country.to_string()))?;

    let term = normalize_query(query);
    let suffix = if cc.is_empty() {
        String::new()
    } else {
        format!("&cc={}", cc)
    };

    (0..pages)
        .map(|page| {
            let first = page_offset(page, per_page).ok_or_else(|| {
                ScrapeError::InvalidParameter(format!(
                    "Offset of page {} overflows with {} results per page",
                    page + 1,
                    per_page
                ))
            })?;
            Ok(format!(
                "{}?q={}&first={}&count={}{}",
                endpoint, term, first, per_page, suffix
            ))
        })
        .collect()
}
