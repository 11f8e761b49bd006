//! Semantic validation of a parsed configuration
//!
//! TOML deserialization only guarantees the shape of the file; this module
//! checks that the values themselves make sense before a scrape starts.

use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(ConfigError)` - A value failed validation
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_base_url(&config.scraper.base_url)?;

    if config.scraper.base_url.ends_with('/') {
        return Err(ConfigError::Validation(
            "base-url must not end with a slash".to_string(),
        ));
    }

    if config.scraper.listing_path.is_empty() {
        return Err(ConfigError::Validation(
            "listing-path must not be empty".to_string(),
        ));
    }

    if config.scraper.listing_path.starts_with('/') {
        return Err(ConfigError::Validation(
            "listing-path must not start with a slash".to_string(),
        ));
    }

    if config.scraper.max_workers == 0 {
        return Err(ConfigError::Validation(
            "max-workers must be at least 1".to_string(),
        ));
    }

    if config.user_agent.scraper_name.is_empty() {
        return Err(ConfigError::Validation(
            "scraper-name must not be empty".to_string(),
        ));
    }

    if config.user_agent.contact_email.is_empty() || !config.user_agent.contact_email.contains('@')
    {
        return Err(ConfigError::Validation(
            "contact-email must be a valid email address".to_string(),
        ));
    }

    Ok(())
}

/// Checks that the base URL parses and uses an http(s) scheme
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let parsed =
        Url::parse(base_url).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", base_url, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{}: scheme must be http or https",
            base_url
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_trailing_slash_base_url_rejected() {
        let mut config = Config::default();
        config.scraper.base_url = "http://forums.pocketmine.net/".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = Config::default();
        config.scraper.base_url = "ftp://forums.pocketmine.net".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_unparseable_base_url_rejected() {
        let mut config = Config::default();
        config.scraper.base_url = "not a url".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_empty_listing_path_rejected() {
        let mut config = Config::default();
        config.scraper.listing_path = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_leading_slash_listing_path_rejected() {
        let mut config = Config::default();
        config.scraper.listing_path = "/plugins".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = Config::default();
        config.scraper.max_workers = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_bad_contact_email_rejected() {
        let mut config = Config::default();
        config.user_agent.contact_email = "not-an-email".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
