//! HTTP client for Bing results pages
//!
//! Sends one GET per page with a randomized User-Agent, directly or
//! through a proxy, and treats any non-200 answer as a block.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::error::{Result, ScrapeError};
use crate::url::SEARCH_ENDPOINT;
use crate::user_agent::random_user_agent;

const PROXY_SCHEMES: &[&str] = &["http", "https", "socks5", "socks5h"];

/// How outbound requests reach Bing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProxySetting {
    /// Direct connection
    #[default]
    NoProxy,
    /// Route all traffic through the proxy at this URL
    /// (e.g. "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080")
    ProxyAt(String),
}

impl ProxySetting {
    /// Maps an optional proxy address onto a setting
    pub fn from_option(address: Option<impl Into<String>>) -> Self {
        match address {
            Some(address) => Self::ProxyAt(address.into()),
            None => Self::NoProxy,
        }
    }

    /// Builds the reqwest proxy, or `None` for a direct connection
    ///
    /// # Errors
    /// Returns `InvalidProxy` if the address is not an absolute URL with a
    /// host and one of the supported schemes
    pub fn to_reqwest(&self) -> Result<Option<reqwest::Proxy>> {
        let address = match self {
            Self::NoProxy => return Ok(None),
            Self::ProxyAt(address) => address.trim(),
        };

        let parsed = reqwest::Url::parse(address)
            .map_err(|e| ScrapeError::InvalidProxy(format!("{}: {}", address, e)))?;

        if !PROXY_SCHEMES.contains(&parsed.scheme()) {
            return Err(ScrapeError::InvalidProxy(format!(
                "{}: unsupported scheme '{}'",
                address,
                parsed.scheme()
            )));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ScrapeError::InvalidProxy(format!("{}: missing host", address)));
        }

        reqwest::Proxy::all(parsed)
            .map(Some)
            .map_err(|e| ScrapeError::InvalidProxy(format!("{}: {}", address, e)))
    }
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Retry attempts for transient transport errors (default: 0)
    pub max_retries: u32,
    /// Proxy routing (default: direct)
    pub proxy: ProxySetting,
    /// Results endpoint (default: https://bing.com/search)
    pub search_endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 0,
            proxy: ProxySetting::NoProxy,
            search_endpoint: SEARCH_ENDPOINT.to_string(),
        }
    }
}

/// HTTP client wrapper for Bing results pages
///
/// Handles:
/// - Transport selection (direct or proxied), resolved once at construction
/// - A fresh random User-Agent on every request
/// - Optional retries with exponential backoff for transient transport errors
pub struct BingClient {
    client: reqwest::Client,
    max_retries: u32,
    search_endpoint: String,
}

impl BingClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `InvalidProxy` - Proxy address is malformed
    /// - `HttpError` - TLS backend or client could not be initialized
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT_LANGUAGE,
                    reqwest::header::HeaderValue::from_static("en-US,en;q=0.9"),
                );
                headers
            });

        if let Some(proxy) = config.proxy.to_reqwest()? {
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(ScrapeError::HttpError)?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            search_endpoint: config.search_endpoint,
        })
    }

    /// Endpoint the page URLs are built against
    pub fn search_endpoint(&self) -> &str {
        &self.search_endpoint
    }

    /// Fetch the HTML of one results page
    ///
    /// # Arguments
    /// * `url` - Fully built results-page URL
    ///
    /// # Returns
    /// The response body as a string
    ///
    /// # Errors
    /// - `HttpError` - Network errors, after any configured retries
    /// - `BannedOrBlocked` - Server returned anything other than 200
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let mut attempt = 0;

        loop {
            match self.do_fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) if Self::is_retryable(&e) && attempt < self.max_retries => {
                    // Exponential backoff: 1s, 2s, 4s
                    let backoff = Duration::from_secs(1 << attempt.min(6));
                    debug!(url, attempt, ?backoff, error = %e, "retrying page request");
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Perform a single fetch attempt
    async fn do_fetch(&self, url: &str) -> Result<String> {
        let user_agent = random_user_agent();
        debug!(url, user_agent, "sending page request");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await
            .map_err(ScrapeError::HttpError)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url, status = status.as_u16(), "non-200 response, likely blocked");
            return Err(ScrapeError::BannedOrBlocked {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(ScrapeError::HttpError)
    }

    /// Check if an error is worth another attempt
    fn is_retryable(error: &ScrapeError) -> bool {
        match error {
            ScrapeError::HttpError(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.proxy, ProxySetting::NoProxy);
        assert_eq!(config.search_endpoint, "https://bing.com/search");
    }

    #[test]
    fn test_client_creation() {
        let client = BingClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_http_proxy() {
        let config = ClientConfig {
            proxy: ProxySetting::ProxyAt("http://127.0.0.1:8080".to_string()),
            ..Default::default()
        };
        assert!(BingClient::with_config(config).is_ok());
    }

    #[test]
    fn test_client_with_socks_proxy() {
        let config = ClientConfig {
            proxy: ProxySetting::ProxyAt("socks5://127.0.0.1:1080".to_string()),
            ..Default::default()
        };
        assert!(BingClient::with_config(config).is_ok());
    }

    #[test]
    fn test_client_rejects_malformed_proxy() {
        let config = ClientConfig {
            proxy: ProxySetting::ProxyAt("not a proxy".to_string()),
            ..Default::default()
        };
        match BingClient::with_config(config) {
            Err(ScrapeError::InvalidProxy(msg)) => assert!(msg.contains("not a proxy")),
            _ => panic!("Expected InvalidProxy error"),
        }
    }

    #[test]
    fn test_proxy_rejects_unknown_scheme() {
        let proxy = ProxySetting::ProxyAt("ftp://127.0.0.1:21".to_string());
        match proxy.to_reqwest() {
            Err(ScrapeError::InvalidProxy(msg)) => assert!(msg.contains("ftp")),
            _ => panic!("Expected InvalidProxy error"),
        }
    }

    #[test]
    fn test_no_proxy_resolves_to_direct() {
        assert!(ProxySetting::NoProxy.to_reqwest().unwrap().is_none());
    }

    #[test]
    fn test_proxy_from_option() {
        assert_eq!(ProxySetting::from_option(None::<String>), ProxySetting::NoProxy);
        assert_eq!(
            ProxySetting::from_option(Some("http://proxy:3128")),
            ProxySetting::ProxyAt("http://proxy:3128".to_string())
        );
    }

    #[test]
    fn test_banned_is_not_retryable() {
        let error = ScrapeError::BannedOrBlocked {
            status: 503,
            url: "https://bing.com/search".to_string(),
        };
        assert!(!BingClient::is_retryable(&error));
    }
}
