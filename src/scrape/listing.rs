//! Listing page scraping
//!
//! The plugin directory is a paginated listing. Two things are extracted
//! from it: the total page count (from the navigation header on the first
//! page) and the resource identifiers present on each page.
//!
//! Extraction is split into pure functions over a parsed [`Html`] document
//! plus thin async wrappers that fetch the page first, so the extraction
//! logic is independent of how the document was obtained.

use crate::resource::ResourceId;
use crate::scrape::fetcher::PageFetcher;
use crate::{HarvestError, Result};
use scraper::{Html, Selector};

/// Parses a `Page <N> of <M>` navigation header into the last page number
///
/// Whitespace-tolerant: any amount of surrounding or internal whitespace is
/// accepted, but the four tokens must appear exactly in this shape.
///
/// # Arguments
///
/// * `text` - The header text, e.g. `" Page 1 of 17 "`
///
/// # Returns
///
/// The value of `<M>`, or `None` if the text does not match the pattern
pub fn parse_page_count(text: &str) -> Option<u32> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    match tokens.as_slice() {
        ["Page", current, "of", last] => {
            current.parse::<u32>().ok()?;
            last.parse::<u32>().ok()
        }
        _ => None,
    }
}

/// Extracts the total page count from a listing page document
///
/// Looks for the single `span.pageNavHeader` element and parses its text.
pub fn extract_page_count(document: &Html) -> Option<u32> {
    let selector = Selector::parse("span.pageNavHeader").ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| parse_page_count(&element.text().collect::<String>()))
}

/// Extracts every resource identifier listed on one page
///
/// Selects each listing item's title link, skipping anchors carrying the
/// `prefixLink` class (category badges that share the title's container but
/// do not point at the resource). The href is stripped of the leading
/// listing-path segment and any trailing slash to yield the bare token.
///
/// Results follow document order. A href that does not parse as a resource
/// identifier is skipped with a debug log rather than failing the page.
///
/// # Arguments
///
/// * `document` - The parsed listing page
/// * `listing_path` - The listing path segment to strip from hrefs, no slashes
pub fn extract_resource_ids(document: &Html, listing_path: &str) -> Vec<ResourceId> {
    let mut ids = Vec::new();

    let selector = match Selector::parse("li.resourceListItem h3.title a") {
        Ok(s) => s,
        Err(_) => return ids,
    };

    let prefix = format!("{}/", listing_path);

    for element in document.select(&selector) {
        if element.value().classes().any(|class| class == "prefixLink") {
            continue;
        }

        let href = match element.value().attr("href") {
            Some(href) => href,
            None => continue,
        };

        let token = href.strip_prefix(&prefix).unwrap_or(href);
        let token = token.strip_suffix('/').unwrap_or(token);

        match token.parse::<ResourceId>() {
            Ok(id) => ids.push(id),
            Err(e) => tracing::debug!("Skipping malformed listing href {}: {}", href, e),
        }
    }

    ids
}

/// Fetches the listing root and returns the last page number
///
/// This is fatal to a full pagination walk: without a page count the walk
/// cannot be scheduled.
///
/// # Arguments
///
/// * `fetcher` - The page fetcher to use
/// * `listing_path` - Listing path relative to the forum root
///
/// # Returns
///
/// * `Ok(u32)` - The last page number
/// * `Err(HarvestError::Parse)` - The navigation header is absent or does
///   not match `Page <N> of <M>`
/// * `Err(HarvestError::Transport)` - The listing root could not be fetched
pub async fn last_page_number(fetcher: &PageFetcher, listing_path: &str) -> Result<u32> {
    let document = fetcher.fetch(listing_path).await?;

    extract_page_count(&document).ok_or_else(|| {
        HarvestError::parse(
            fetcher.absolute_url(listing_path),
            "missing or malformed 'Page N of M' navigation header",
        )
    })
}

/// Fetches one listing page and returns the resource identifiers on it
///
/// An empty result is valid: pages past the real range, or pages with no
/// items, simply yield nothing.
///
/// # Arguments
///
/// * `fetcher` - The page fetcher to use
/// * `listing_path` - Listing path relative to the forum root
/// * `page_number` - 1-based page number
pub async fn plugins_on_page(
    fetcher: &PageFetcher,
    listing_path: &str,
    page_number: u32,
) -> Result<Vec<ResourceId>> {
    let path = format!("{}/?page={}", listing_path, page_number);
    let document = fetcher.fetch(&path).await?;

    Ok(extract_resource_ids(&document, listing_path))
}
