use serde::Deserialize;

/// Main configuration structure for Phar-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Base URL of the forum, without a trailing slash
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Path of the plugin listing relative to the base URL, no leading slash
    #[serde(rename = "listing-path", default = "default_listing_path")]
    pub listing_path: String,

    /// Maximum number of concurrent page fetches
    #[serde(rename = "max-workers", default = "default_max_workers")]
    pub max_workers: usize,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(rename = "scraper-name", default = "default_scraper_name")]
    pub scraper_name: String,

    /// Version of the scraper
    #[serde(rename = "scraper-version", default = "default_scraper_version")]
    pub scraper_version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url", default = "default_contact_url")]
    pub contact_url: String,

    /// Email address for scraper-related contact
    #[serde(rename = "contact-email", default = "default_contact_email")]
    pub contact_email: String,
}

fn default_base_url() -> String {
    "http://forums.pocketmine.net".to_string()
}

fn default_listing_path() -> String {
    "plugins".to_string()
}

fn default_max_workers() -> usize {
    4
}

fn default_scraper_name() -> String {
    "PharHarvest".to_string()
}

fn default_scraper_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_contact_url() -> String {
    "https://example.com/about".to_string()
}

fn default_contact_email() -> String {
    "admin@example.com".to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            listing_path: default_listing_path(),
            max_workers: default_max_workers(),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            scraper_name: default_scraper_name(),
            scraper_version: default_scraper_version(),
            contact_url: default_contact_url(),
            contact_email: default_contact_email(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig::default(),
            user_agent: UserAgentConfig::default(),
        }
    }
}
