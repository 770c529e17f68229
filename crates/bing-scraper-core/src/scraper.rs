//! Main scraper API for Bing
//!
//! Combines the URL builder, HTTP client and result parser into one
//! sequential multi-page scrape.

use std::time::Duration;

use tracing::{debug, info};

use crate::client::{BingClient, ClientConfig, ProxySetting};
use crate::error::{Result, ScrapeError};
use crate::parser::parse_search_results;
use crate::types::{ScrapeRequest, SearchResult};
use crate::url::build_search_urls_at;

/// Main scraper API for Bing
///
/// Holds one HTTP client, so the pages of a run share connections.
/// Each call to [`BingScraper::scrape`] owns its own result list.
pub struct BingScraper {
    client: BingClient,
}

impl BingScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = BingClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// - `InvalidProxy` if the configured proxy is malformed
    /// - `HttpError` if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = BingClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Scrape every requested page and return the results in rank order
    ///
    /// Pages are fetched one after another with `request.backoff` between
    /// them. Ranks continue from the number of results collected so far,
    /// so a short page does not leave a gap.
    ///
    /// # Errors
    /// - `InvalidQuery` if the query is empty or whitespace only
    /// - `InvalidParameter` if `pages` or `per_page` is zero, or a page
    ///   offset overflows
    /// - `UnsupportedCountry` before any request is sent
    /// - `HttpError` / `BannedOrBlocked` from any page; results collected
    ///   from earlier pages are discarded
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> bing_scraper_core::Result<()> {
    /// use bing_scraper_core::{BingScraper, ScrapeRequest};
    /// let scraper = BingScraper::new()?;
    /// let request = ScrapeRequest::new("github").with_pages(2);
    /// for result in scraper.scrape(&request).await? {
    ///     println!("{}. {} - {}", result.rank, result.title, result.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn scrape(&self, request: &ScrapeRequest) -> Result<Vec<SearchResult>> {
        if request.query.trim().is_empty() {
            return Err(ScrapeError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }
        if request.pages == 0 {
            return Err(ScrapeError::InvalidParameter(
                "Page count must be at least 1".to_string(),
            ));
        }
        if request.per_page == 0 {
            return Err(ScrapeError::InvalidParameter(
                "Results per page must be at least 1".to_string(),
            ));
        }

        let pages = build_search_urls_at(
            self.client.search_endpoint(),
            &request.query,
            &request.country,
            request.pages,
            request.per_page,
        )?;

        let mut results: Vec<SearchResult> = Vec::new();

        for (index, page_url) in pages.iter().enumerate() {
            if index > 0 && !request.backoff.is_zero() {
                debug!(backoff = ?request.backoff, "backing off before next page");
                tokio::time::sleep(request.backoff).await;
            }

            let html = self.client.fetch(page_url).await?;
            let page_results = parse_search_results(&html, results.len())?;

            debug!(page = index + 1, found = page_results.len(), "parsed results page");
            results.extend(page_results);
        }

        info!(
            query = %request.query,
            pages = request.pages,
            total = results.len(),
            "scrape finished"
        );

        Ok(results)
    }
}

/// One-shot scrape with explicit parameters
///
/// Builds a scraper for the given proxy setting and runs a single scrape.
///
/// # Arguments
/// * `query` - Search term
/// * `country` - Code from the country table
/// * `proxy` - Direct connection or proxy address
/// * `pages` - Number of result pages
/// * `per_page` - Results requested per page
/// * `backoff_secs` - Pause between pages in seconds, 0 disables it
///
/// # Example
/// ```no_run
/// # async fn example() -> bing_scraper_core::Result<()> {
/// use bing_scraper_core::{scrape, ProxySetting};
/// let results = scrape("github", "com", ProxySetting::NoProxy, 1, 30, 10).await?;
/// # Ok(())
/// # }
/// ```
pub async fn scrape(
    query: &str,
    country: &str,
    proxy: ProxySetting,
    pages: usize,
    per_page: usize,
    backoff_secs: u64,
) -> Result<Vec<SearchResult>> {
    let scraper = BingScraper::with_config(ClientConfig {
        proxy,
        ..Default::default()
    })?;

    let request = ScrapeRequest::new(query)
        .with_country(country)
        .with_pages(pages)
        .with_per_page(per_page)
        .with_backoff(Duration::from_secs(backoff_secs));

    scraper.scrape(&request).await
}
