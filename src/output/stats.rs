//! Scrape statistics summary
//!
//! This module summarizes a finished scrape for display: how many plugins
//! were extracted, how many versions their histories held, and the total
//! download volume.

use crate::record::PluginRecord;
use std::collections::HashMap;

/// Summary of one scrape run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeStatistics {
    /// Number of plugin records extracted
    pub total_plugins: u64,

    /// Total version rows across all records
    pub total_versions: u64,

    /// Records whose version table yielded no rows
    pub plugins_without_versions: u64,

    /// Sum of every record's total download count
    pub total_downloads: u64,
}

impl ScrapeStatistics {
    /// Computes statistics from a slug-keyed record map
    pub fn from_records(plugins: &HashMap<String, PluginRecord>) -> Self {
        let total_plugins = plugins.len() as u64;
        let total_versions = plugins.values().map(|p| p.versions.len() as u64).sum();
        let plugins_without_versions =
            plugins.values().filter(|p| p.versions.is_empty()).count() as u64;
        let total_downloads = plugins.values().map(|p| p.popularity.total).sum();

        Self {
            total_plugins,
            total_versions,
            plugins_without_versions,
            total_downloads,
        }
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &ScrapeStatistics) {
    println!("=== Scrape Statistics ===\n");

    println!("Overview:");
    println!("  Plugins extracted: {}", stats.total_plugins);
    println!("  Version rows: {}", stats.total_versions);
    println!("  Total downloads: {}", stats.total_downloads);
    println!();

    if stats.plugins_without_versions > 0 {
        println!(
            "Plugins with an empty version history: {}",
            stats.plugins_without_versions
        );
        println!();
    }

    let average_versions = if stats.total_plugins > 0 {
        stats.total_versions as f64 / stats.total_plugins as f64
    } else {
        0.0
    };

    println!("Average versions per plugin: {:.1}", average_versions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Popularity, VersionRecord, SERVER_TAG};

    fn record(slug: &str, downloads: u64, versions: usize) -> PluginRecord {
        PluginRecord {
            plugin_name: slug.to_string(),
            authors: vec!["alice".to_string()],
            categories: vec!["Admin Tools".to_string()],
            logo: String::new(),
            description: String::new(),
            popularity: Popularity { total: downloads },
            server: SERVER_TAG.to_string(),
            website: format!("plugins/{}.1", slug),
            slug: slug.to_string(),
            id: "1".to_string(),
            versions: (0..versions)
                .map(|n| VersionRecord {
                    version: format!("1.{}", n),
                    date: "1425221700".to_string(),
                    download: String::new(),
                    filename: format!("{}_1.{}.phar", slug, n),
                })
                .collect(),
        }
    }

    #[test]
    fn test_statistics_from_records() {
        let mut plugins = HashMap::new();
        plugins.insert("a".to_string(), record("a", 100, 3));
        plugins.insert("b".to_string(), record("b", 50, 0));

        let stats = ScrapeStatistics::from_records(&plugins);
        assert_eq!(stats.total_plugins, 2);
        assert_eq!(stats.total_versions, 3);
        assert_eq!(stats.plugins_without_versions, 1);
        assert_eq!(stats.total_downloads, 150);
    }

    #[test]
    fn test_statistics_empty_map() {
        let stats = ScrapeStatistics::from_records(&HashMap::new());
        assert_eq!(stats.total_plugins, 0);
        assert_eq!(stats.total_versions, 0);
        assert_eq!(stats.total_downloads, 0);
    }
}
