//! JSON serialization of scrape results
//!
//! Records are written as pretty-printed JSON, either to stdout or to a
//! file. Only the field set is a contract; formatting and key order are not.

use crate::Result;
use serde::Serialize;
use std::path::Path;

/// Serializes a value as pretty JSON to stdout or a file
///
/// # Arguments
///
/// * `value` - Any serializable value (the slug-keyed record map, a single
///   record, or a resource identifier list)
/// * `output` - Destination file, or `None` for stdout
///
/// # Returns
///
/// * `Ok(())` - Successfully written
/// * `Err(HarvestError)` - Serialization or file IO failed
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json))?;
            tracing::info!("Wrote results to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_json_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        let ids = vec!["foo.1".to_string(), "bar.2".to_string()];
        write_json(&ids, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, ids);
    }

    #[test]
    fn test_write_json_to_missing_directory_fails() {
        let ids: Vec<String> = vec![];
        let result = write_json(&ids, Some(Path::new("/nonexistent/dir/out.json")));
        assert!(result.is_err());
    }
}
