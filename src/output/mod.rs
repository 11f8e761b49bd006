//! Output generation for scrape results
//!
//! Two consumers: JSON serialization of the extracted records, and a short
//! statistics summary printed after a full run.

mod json;
mod stats;

pub use json::write_json;
pub use stats::{print_statistics, ScrapeStatistics};
