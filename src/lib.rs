//! Phar-Harvest: a PocketMine plugin directory scraper
//!
//! This crate crawls the paginated plugin listing on the PocketMine forums,
//! enumerates plugin resource identifiers, then fetches each plugin's
//! version-history page and normalizes it into a [`record::PluginRecord`],
//! with a bounded number of concurrent fetches in flight.

pub mod config;
pub mod output;
pub mod record;
pub mod resource;
pub mod scrape;

use thiserror::Error;

/// Main error type for Phar-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Parse error for {context}: {message}")]
    Parse { context: String, message: String },

    #[error("Worker count must be a positive integer")]
    InvalidWorkerCount,

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarvestError {
    /// Builds a `Parse` error for a named extraction context
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        HarvestError::Parse {
            context: context.into(),
            message: message.into(),
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Phar-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use record::{PluginRecord, VersionRecord};
pub use resource::ResourceId;
pub use scrape::{run_scrape, PageFetcher};
