//! Error types for the Bing scraper
//!
//! Every failure aborts the whole scrape, so one enum covers URL building,
//! transport, blocking and parsing.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all scraper operations
///
/// Implements Display for human-readable messages and Serialize
/// so front-ends can forward it as a plain string.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Country code is not in the country table
    #[error("Country ({0}) is currently not supported")]
    UnsupportedCountry(String),

    /// HTTP transport failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Proxy address could not be turned into a transport
    #[error("Invalid proxy: {0}")]
    InvalidProxy(String),

    /// Server answered with something other than 200
    #[error("Received HTTP {status} from {url}, the scraper is probably banned")]
    BannedOrBlocked { status: u16, url: String },

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Search query is empty or unusable
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Pagination parameter out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ScrapeError {
    /// True for failures that happened while reaching the remote host
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::InvalidProxy(_))
    }
}

impl Serialize for ScrapeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unsupported_country() {
        let error = ScrapeError::UnsupportedCountry("xx".to_string());
        assert_eq!(error.to_string(), "Country (xx) is currently not supported");
    }

    #[test]
    fn test_error_display_banned() {
        let error = ScrapeError::BannedOrBlocked {
            status: 429,
            url: "https://bing.com/search?q=rust".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Received HTTP 429 from https://bing.com/search?q=rust, the scraper is probably banned"
        );
    }

    #[test]
    fn test_error_display_invalid_proxy() {
        let error = ScrapeError::InvalidProxy("not a url".to_string());
        assert_eq!(error.to_string(), "Invalid proxy: not a url");
    }

    #[test]
    fn test_error_display_parse_error() {
        let error = ScrapeError::ParseError("bad selector".to_string());
        assert_eq!(error.to_string(), "Failed to parse HTML: bad selector");
    }

    #[test]
    fn test_is_transport() {
        assert!(ScrapeError::InvalidProxy("x".to_string()).is_transport());
        assert!(!ScrapeError::ParseError("x".to_string()).is_transport());
        assert!(
            !ScrapeError::BannedOrBlocked {
                status: 503,
                url: String::new()
            }
            .is_transport()
        );
    }

    #[test]
    fn test_error_serialize() {
        let error = ScrapeError::InvalidQuery("empty".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Invalid query: empty\"");
    }
}
