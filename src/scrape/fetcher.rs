//! HTTP fetching and document loading
//!
//! This module builds the HTTP client used for every request and wraps it in
//! a [`PageFetcher`] that resolves forum-relative paths against the
//! configured base URL and hands back parsed documents.
//!
//! Only transport-level failures are errors here. A non-success HTTP status
//! with a parseable body is not a fetch failure; whether the body contains
//! what the caller expects is the extraction layer's concern.

use crate::config::UserAgentConfig;
use crate::{HarvestError, Result};
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use phar_harvest::config::UserAgentConfig;
/// use phar_harvest::scrape::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> std::result::Result<Client, reqwest::Error> {
    // Format: ScraperName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.scraper_name, config.scraper_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches forum pages relative to a fixed base URL
///
/// Cloning is cheap: the inner `reqwest::Client` is an `Arc` around its
/// connection pool, so one fetcher can be handed to many concurrent tasks.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    base_url: String,
}

impl PageFetcher {
    /// Creates a fetcher over the given client and base URL
    ///
    /// # Arguments
    ///
    /// * `client` - The HTTP client to use for every request
    /// * `base_url` - Forum base URL without a trailing slash
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Returns the base URL this fetcher resolves against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a relative path to an absolute URL
    ///
    /// Plain concatenation with a single separating slash; the caller must
    /// supply a well-formed path (no leading slash, query string included).
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetches a page and parses it into a queryable document
    ///
    /// # Arguments
    ///
    /// * `path` - Path relative to the base URL, without a leading slash
    ///
    /// # Returns
    ///
    /// * `Ok(Html)` - The parsed document
    /// * `Err(HarvestError::Transport)` - A network-level failure (DNS,
    ///   connection, timeout, or body read)
    pub async fn fetch(&self, path: &str) -> Result<Html> {
        let url = self.absolute_url(path);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| HarvestError::Transport {
                url: url.clone(),
                source,
            })?;

        let body = response
            .text()
            .await
            .map_err(|source| HarvestError::Transport {
                url: url.clone(),
                source,
            })?;

        Ok(Html::parse_document(&body))
    }
}
