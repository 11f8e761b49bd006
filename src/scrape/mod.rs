//! Scraping module for the plugin directory
//!
//! This module contains the whole fetch/parse pipeline:
//! - HTTP fetching and document loading
//! - Listing pagination and per-page identifier extraction
//! - Detail-page extraction into plugin records
//! - Bounded-concurrency fan-out and overall orchestration

mod detail;
mod fetcher;
mod listing;
mod walker;

pub use detail::{extract_plugin_record, plugin_data};
pub use fetcher::{build_http_client, PageFetcher};
pub use listing::{extract_page_count, extract_resource_ids, last_page_number, plugins_on_page};
pub use walker::{all_resource_ids, bulk_plugin_data};

use crate::config::Config;
use crate::record::PluginRecord;
use crate::Result;
use std::collections::HashMap;

/// Runs a complete scrape of the plugin directory
///
/// Two strictly sequential phases: first every listing page is walked to
/// enumerate resource identifiers, then every identifier's detail page is
/// fetched. Detail fetching never starts before the full identifier list is
/// known, which trades latency for an accurate total count up front.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(HashMap<String, PluginRecord>)` - All plugin records keyed by slug
/// * `Err(HarvestError)` - Any phase failed
pub async fn run_scrape(config: &Config) -> Result<HashMap<String, PluginRecord>> {
    let client = build_http_client(&config.user_agent)?;
    let fetcher = PageFetcher::new(client, config.scraper.base_url.clone());

    let started = std::time::Instant::now();

    let resource_ids = all_resource_ids(
        &fetcher,
        &config.scraper.listing_path,
        config.scraper.max_workers,
    )
    .await?;

    tracing::info!(
        "Enumerated {} resource identifiers in {:?}",
        resource_ids.len(),
        started.elapsed()
    );

    let plugins = bulk_plugin_data(
        &fetcher,
        &config.scraper.listing_path,
        &resource_ids,
        config.scraper.max_workers,
    )
    .await?;

    tracing::info!(
        "Scraped {} plugins in {:?} total",
        plugins.len(),
        started.elapsed()
    );

    Ok(plugins)
}
