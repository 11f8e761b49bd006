//! Bounded-concurrency fan-out over listing pages and detail pages
//!
//! Both operations here schedule one task per unit of work and gate the
//! tasks behind a semaphore so at most `max_workers` fetches are in flight
//! at any instant. The cap is the only backpressure mechanism; there is no
//! retry and no adaptive throttling. Completion order is unspecified.

use crate::record::PluginRecord;
use crate::resource::ResourceId;
use crate::scrape::detail::plugin_data;
use crate::scrape::fetcher::PageFetcher;
use crate::scrape::listing::{last_page_number, plugins_on_page};
use crate::{HarvestError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Walks every listing page and collects all resource identifiers
///
/// Step 1 fetches the listing root to learn the page count; an error there
/// aborts the whole walk, since it cannot be scheduled without a total.
/// Step 2 scrapes pages `1..=last` with at most `max_workers` concurrent
/// fetches, concatenating each page's identifiers in completion order.
///
/// Abort-on-first-error: if any page fails, the operation fails with that
/// error and no partial result is returned. Tasks still in flight are
/// aborted.
///
/// # Arguments
///
/// * `fetcher` - The page fetcher to use
/// * `listing_path` - Listing path relative to the forum root
/// * `max_workers` - Concurrency cap; must be at least 1 (1 degenerates to
///   fully sequential scraping)
///
/// # Returns
///
/// * `Ok(Vec<ResourceId>)` - All identifiers across all pages, order
///   insensitive
/// * `Err(HarvestError)` - The paginator or any page scrape failed
pub async fn all_resource_ids(
    fetcher: &PageFetcher,
    listing_path: &str,
    max_workers: usize,
) -> Result<Vec<ResourceId>> {
    if max_workers == 0 {
        return Err(HarvestError::InvalidWorkerCount);
    }

    let last_page = last_page_number(fetcher, listing_path).await?;
    tracing::info!("Listing spans {} pages", last_page);

    let semaphore = Arc::new(Semaphore::new(max_workers));
    let mut tasks = JoinSet::new();

    for page_number in 1..=last_page {
        let fetcher = fetcher.clone();
        let listing_path = listing_path.to_string();
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            // The semaphore is never closed while tasks hold the Arc
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("semaphore closed while tasks are running");

            plugins_on_page(&fetcher, &listing_path, page_number).await
        });
    }

    let mut resource_ids = Vec::new();

    while let Some(joined) = tasks.join_next().await {
        let page_ids = joined??;
        resource_ids.extend(page_ids);
    }

    Ok(resource_ids)
}

/// Fetches plugin records for a list of resource identifiers
///
/// Runs the detail-page parser over each identifier with at most
/// `max_workers` concurrent fetches, inserting successful records into a
/// slug-keyed map in completion order; a later-completing task with the
/// same slug overwrites an earlier one.
///
/// On the first task failure the operation returns that error and the
/// partially built map is discarded; remaining in-flight tasks are aborted.
///
/// # Arguments
///
/// * `fetcher` - The page fetcher to use
/// * `listing_path` - Listing path relative to the forum root
/// * `resource_ids` - The identifiers to fetch
/// * `max_workers` - Concurrency cap; must be at least 1
///
/// # Returns
///
/// * `Ok(HashMap<String, PluginRecord>)` - Records keyed by slug
/// * `Err(HarvestError)` - Any single fetch or parse failed
pub async fn bulk_plugin_data(
    fetcher: &PageFetcher,
    listing_path: &str,
    resource_ids: &[ResourceId],
    max_workers: usize,
) -> Result<HashMap<String, PluginRecord>> {
    if max_workers == 0 {
        return Err(HarvestError::InvalidWorkerCount);
    }

    let semaphore = Arc::new(Semaphore::new(max_workers));
    let mut tasks = JoinSet::new();

    for resource_id in resource_ids.iter().cloned() {
        let fetcher = fetcher.clone();
        let listing_path = listing_path.to_string();
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("semaphore closed while tasks are running");

            plugin_data(&fetcher, &listing_path, &resource_id).await
        });
    }

    let mut plugins = HashMap::new();

    while let Some(joined) = tasks.join_next().await {
        let record = joined??;
        plugins.insert(record.slug.clone(), record);
    }

    Ok(plugins)
}
