//! Core data types for the Bing scraper
//!
//! Contains the result record and the parameters of one scrape run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One organic result from a Bing results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 1-based position across every page of the run
    pub rank: usize,

    /// Target link, always absolute
    pub url: String,

    /// Heading text, may be empty
    pub title: String,

    /// Caption snippet, may be empty
    pub description: String,
}

/// Parameters of a single multi-page scrape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    /// Search term as typed by the user
    pub query: String,
    /// Country code from the country table (default: "com")
    pub country: String,
    /// Number of result pages to fetch (default: 1)
    pub pages: usize,
    /// Results requested per page (default: 30)
    pub per_page: usize,
    /// Pause between two page requests (default: 10s)
    pub backoff: Duration,
}

impl ScrapeRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            country: "com".to_string(),
            pages: 1,
            per_page: 30,
            backoff: Duration::from_secs(10),
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_pages(mut self, pages: usize) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }
}
