//! Configuration module for Phar-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every setting has a built-in default pointing at the canonical PocketMine
//! forum, so a config file is optional.
//!
//! # Example
//!
//! ```no_run
//! use phar_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping {} with {} workers", config.scraper.base_url, config.scraper.max_workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ScraperConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
