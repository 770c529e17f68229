//! Bing Results Scraper Core Library
//!
//! Provides an async API for scraping organic results from Bing result pages.
//!
//! # Overview
//!
//! This crate covers the whole pipeline:
//! - URL building with Bing's 1-based pagination and per-country markets
//! - An HTTP client with randomized User-Agent and optional proxy routing
//! - An HTML parser for the organic result entries
//! - A sequential multi-page scrape with a fixed backoff between pages
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use bing_scraper_core::{BingScraper, Result, ScrapeRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = BingScraper::new()?;
//!
//!     let request = ScrapeRequest::new("github")
//!         .with_country("uk")
//!         .with_pages(2)
//!         .with_backoff(Duration::from_secs(5));
//!
//!     for result in scraper.scrape(&request).await? {
//!         println!("{}. {} ({})", result.rank, result.title, result.url);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Blocking
//!
//! Any non-200 answer aborts the whole scrape with
//! [`ScrapeError::BannedOrBlocked`] and no partial results. Bing answers
//! that way once it has flagged the client, so continuing with the next
//! page would only make things worse.

mod client;
pub mod country;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;
pub mod user_agent;

// Re-export client types
pub use client::{BingClient, ClientConfig, ProxySetting};

// Re-export error types
pub use error::{Result, ScrapeError};

// Re-export parser functions
pub use parser::parse_search_results;

// Re-export main scraper API
pub use self::scraper::{BingScraper, scrape};

// Re-export data types
pub use types::{ScrapeRequest, SearchResult};

// Re-export URL helper functions for convenience
pub use url::{build_search_urls, build_search_urls_at, page_offset};
