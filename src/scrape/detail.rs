//! Detail page parsing
//!
//! Each plugin's version-history page carries everything the record needs:
//! name, author, category, logo, tag line, download count, and the full
//! version table. [`extract_plugin_record`] is pure over a parsed document,
//! so the same extraction runs regardless of how the HTML was obtained;
//! [`plugin_data`] is the HTTP-backed wrapper around it.
//!
//! Failure policy: a missing required top-level field fails the whole
//! record, while a malformed version-table row is dropped and the remaining
//! rows are kept.

use crate::record::{PluginRecord, Popularity, VersionRecord, SERVER_TAG};
use crate::resource::ResourceId;
use crate::scrape::fetcher::PageFetcher;
use crate::{HarvestError, Result};
use scraper::{ElementRef, Html, Selector};

/// Fetches a plugin's version-history page and extracts its record
///
/// # Arguments
///
/// * `fetcher` - The page fetcher to use
/// * `listing_path` - Listing path relative to the forum root
/// * `resource_id` - The plugin's resource identifier
///
/// # Returns
///
/// * `Ok(PluginRecord)` - The fully extracted record
/// * `Err(HarvestError::Transport)` - The history page could not be fetched
/// * `Err(HarvestError::Parse)` - A required top-level field was missing
pub async fn plugin_data(
    fetcher: &PageFetcher,
    listing_path: &str,
    resource_id: &ResourceId,
) -> Result<PluginRecord> {
    let path = format!("{}/{}/history", listing_path, resource_id);
    let document = fetcher.fetch(&path).await?;

    extract_plugin_record(&document, resource_id, fetcher.base_url(), listing_path)
}

/// Extracts a plugin record from a parsed version-history document
///
/// Pure over the document: callers that obtain the HTML through another
/// mechanism (a browser engine, a fixture file) get field-for-field
/// identical records.
///
/// The slug and id in the record are re-derived from `resource_id`, not
/// re-scraped from the page.
///
/// # Arguments
///
/// * `document` - The parsed history page
/// * `resource_id` - The identifier the page was fetched for
/// * `base_url` - Forum base URL, prefixed onto the logo and download paths
/// * `listing_path` - Listing path, used to build the `website` field
pub fn extract_plugin_record(
    document: &Html,
    resource_id: &ResourceId,
    base_url: &str,
    listing_path: &str,
) -> Result<PluginRecord> {
    let context = format!("plugin '{}'", resource_id);
    let missing = |what: &str| HarvestError::parse(context.clone(), format!("missing {}", what));

    // The title element reads "<Name> <CurrentVersion>"; grab the version
    // from its dedicated span first, then strip that suffix off the full
    // title text to recover the bare name.
    let current_version = select_text(document, ".resourceInfo h1 span")
        .ok_or_else(|| missing("current version element (.resourceInfo h1 span)"))?;

    let full_title = select_text(document, ".resourceInfo h1")
        .ok_or_else(|| missing("title element (.resourceInfo h1)"))?;

    let plugin_name = strip_version_suffix(&full_title, &current_version);

    // The page may list several authors; only the first is kept.
    let author = select_text(document, "#resourceInfo dl.author dd a")
        .ok_or_else(|| missing("author element (#resourceInfo dl.author dd a)"))?;

    let category = select_text(document, "#resourceInfo dl.resourceCategory dd a")
        .ok_or_else(|| missing("category element (#resourceInfo dl.resourceCategory dd a)"))?;

    let logo_path = select_attr(document, ".resourceInfo img.resourceIcon", "src")
        .ok_or_else(|| missing("logo element (.resourceInfo img.resourceIcon)"))?;

    let description = select_text(document, ".resourceInfo p.tagLine")
        .ok_or_else(|| missing("description element (.resourceInfo p.tagLine)"))?;

    let downloads_text = select_text(document, "#resourceInfo dl.downloadCount dd")
        .ok_or_else(|| missing("download count element (#resourceInfo dl.downloadCount dd)"))?;

    let total = parse_download_count(&downloads_text).ok_or_else(|| {
        HarvestError::parse(
            context.clone(),
            format!("download count '{}' is not numeric", downloads_text),
        )
    })?;

    let versions = extract_versions(document, &plugin_name, base_url);

    Ok(PluginRecord {
        plugin_name,
        authors: vec![author],
        categories: vec![category],
        logo: format!("{}/{}", base_url, logo_path),
        description,
        popularity: Popularity { total },
        server: SERVER_TAG.to_string(),
        website: format!("{}/{}", listing_path, resource_id),
        slug: resource_id.slug.clone(),
        id: resource_id.id.clone(),
        versions,
    })
}

/// Strips the trailing `<space><version>` suffix from a title
///
/// The version string is matched literally (its dots are not wildcards).
/// If the title does not end with the version the full title is kept.
fn strip_version_suffix(title: &str, version: &str) -> String {
    let title = title.trim();

    match title.strip_suffix(version) {
        Some(rest) if rest.ends_with(char::is_whitespace) => rest.trim_end().to_string(),
        _ => title.to_string(),
    }
}

/// Parses a comma-formatted download count, e.g. `"12,345"` -> `12345`
fn parse_download_count(text: &str) -> Option<u64> {
    text.replace(',', "").parse().ok()
}

/// Extracts the version-history table, dropping malformed rows
///
/// The first `tr.dataRow` is a header styled identically to data rows and
/// is always skipped. Each remaining row either yields a complete
/// [`VersionRecord`] or is excluded; one bad row never aborts the rest.
fn extract_versions(document: &Html, plugin_name: &str, base_url: &str) -> Vec<VersionRecord> {
    let selector = match Selector::parse("table.resourceHistory tr.dataRow") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .skip(1)
        .filter_map(|row| extract_version_row(row, plugin_name, base_url))
        .collect()
}

/// Extracts one version-table row, or `None` if any required field is absent
fn extract_version_row(
    row: ElementRef<'_>,
    plugin_name: &str,
    base_url: &str,
) -> Option<VersionRecord> {
    let version = child_text(row, "td.version")?;

    // Prefer the machine-readable timestamp attribute; older rows only
    // carry the human-readable title.
    let date = child_attr(row, "td.releaseDate abbr", "data-time")
        .or_else(|| child_attr(row, "td.releaseDate .DateTime", "title"))?;

    let download_path = child_attr(row, "td.dataOptions.download a", "href")?;

    Some(VersionRecord {
        filename: format!("{}_{}.phar", plugin_name, version),
        download: format!("{}/{}", base_url, download_path),
        version,
        date,
    })
}

/// Returns the trimmed text of the first element matching `selector`
fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Returns an attribute of the first element matching `selector`
fn select_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
}

/// Returns the trimmed text of the first descendant matching `selector`
fn child_text(element: ElementRef<'_>, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;

    element
        .select(&selector)
        .next()
        .map(|child| child.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Returns an attribute of the first descendant matching `selector`
fn child_attr(element: ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;

    element
        .select(&selector)
        .next()
        .and_then(|child| child.value().attr(attr))
        .map(str::to_string)
}
