//! Normalized output records
//!
//! These are the shapes handed to callers once a plugin page has been
//! scraped. They are built once during extraction and never mutated
//! afterwards; serialization order matches the field order here.

use serde::Serialize;

/// Tag identifying the source ecosystem in every record
pub const SERVER_TAG: &str = "pocketmine";

/// A fully extracted plugin record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginRecord {
    /// Plugin name with the current-version suffix stripped
    pub plugin_name: String,

    /// Plugin authors; the forum page yields exactly one
    pub authors: Vec<String>,

    /// Plugin categories; the forum page yields exactly one
    pub categories: Vec<String>,

    /// Absolute URL of the plugin icon
    pub logo: String,

    /// Free-text tag line shown under the plugin title
    pub description: String,

    pub popularity: Popularity,

    /// Source ecosystem tag, always [`SERVER_TAG`]
    pub server: String,

    /// Path of the canonical plugin page relative to the forum root
    pub website: String,

    pub slug: String,
    pub id: String,

    /// Version history in page order, newest first
    pub versions: Vec<VersionRecord>,
}

/// Download popularity counters
///
/// The forum only tracks a total download count, so that is all there is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Popularity {
    pub total: u64,
}

/// One row of the version-history table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionRecord {
    /// Free-form version label as shown in the table
    pub version: String,

    /// Release timestamp exactly as the page provides it, never reparsed
    pub date: String,

    /// Absolute download URL
    pub download: String,

    /// Synthesized archive name: `<plugin name>_<version>.phar`
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_expected_fields() {
        let record = PluginRecord {
            plugin_name: "Foo Bar".to_string(),
            authors: vec!["alice".to_string()],
            categories: vec!["Admin Tools".to_string()],
            logo: "http://forums.pocketmine.net/icons/foo.png".to_string(),
            description: "Does foo to bar".to_string(),
            popularity: Popularity { total: 12345 },
            server: SERVER_TAG.to_string(),
            website: "plugins/foo-bar.42".to_string(),
            slug: "foo-bar".to_string(),
            id: "42".to_string(),
            versions: vec![VersionRecord {
                version: "1.2.0".to_string(),
                date: "Mar 1, 2015 at 2:15 PM".to_string(),
                download: "http://forums.pocketmine.net/plugins/foo-bar.42/download?version=7"
                    .to_string(),
                filename: "Foo Bar_1.2.0.phar".to_string(),
            }],
        };

        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["plugin_name"], "Foo Bar");
        assert_eq!(json["popularity"]["total"], 12345);
        assert_eq!(json["server"], "pocketmine");
        assert_eq!(json["versions"][0]["filename"], "Foo Bar_1.2.0.phar");
    }
}
