//! Resource identifier handling
//!
//! Every plugin on the forum is addressed by a resource identifier of the
//! form `<slug>.<numeric-id>`, e.g. `worldeditart.1351`. The slug is the
//! hyphenated human-readable name and the trailing digit run is the numeric
//! resource number. The numeric part is kept as a string so identifiers
//! round-trip byte-for-byte (leading zeros included).

use crate::{HarvestError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A parsed plugin resource identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceId {
    /// Everything before the final dot
    pub slug: String,

    /// The trailing digit run after the final dot
    pub id: String,
}

impl FromStr for ResourceId {
    type Err = HarvestError;

    /// Splits a raw `<slug>.<digits>` token into its parts
    ///
    /// The split is anchored on the *last* dot, so slugs containing dots
    /// (e.g. `some.plugin.42`) keep everything before the final dot.
    ///
    /// # Errors
    ///
    /// Returns a parse error when the token has no dot, the slug part is
    /// empty, or the trailing part is not a non-empty run of ASCII digits.
    fn from_str(token: &str) -> Result<Self> {
        let malformed = || {
            HarvestError::parse(
                format!("resource identifier '{}'", token),
                "expected the form <slug>.<numeric-id>",
            )
        };

        let dot = token.rfind('.').ok_or_else(malformed)?;
        let (slug, id) = (&token[..dot], &token[dot + 1..]);

        if slug.is_empty() || id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        Ok(ResourceId {
            slug: slug.to_string(),
            id: id.to_string(),
        })
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.slug, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_token() {
        let id: ResourceId = "worldeditart.1351".parse().unwrap();
        assert_eq!(id.slug, "worldeditart");
        assert_eq!(id.id, "1351");
    }

    #[test]
    fn test_parse_splits_on_last_dot() {
        let id: ResourceId = "some.plugin.42".parse().unwrap();
        assert_eq!(id.slug, "some.plugin");
        assert_eq!(id.id, "42");
    }

    #[test]
    fn test_parse_preserves_leading_zeros() {
        let id: ResourceId = "plugin.007".parse().unwrap();
        assert_eq!(id.id, "007");
    }

    #[test]
    fn test_parse_no_dot_fails() {
        assert!("worldeditart".parse::<ResourceId>().is_err());
    }

    #[test]
    fn test_parse_non_numeric_id_fails() {
        assert!("worldeditart.13a1".parse::<ResourceId>().is_err());
    }

    #[test]
    fn test_parse_empty_slug_fails() {
        assert!(".1351".parse::<ResourceId>().is_err());
    }

    #[test]
    fn test_parse_empty_id_fails() {
        assert!("worldeditart.".parse::<ResourceId>().is_err());
    }

    #[test]
    fn test_parse_error_is_parse_variant() {
        let err = "nodigits".parse::<ResourceId>().unwrap_err();
        assert!(matches!(err, HarvestError::Parse { .. }));
    }

    #[test]
    fn test_display_round_trips() {
        let id: ResourceId = "some.plugin.42".parse().unwrap();
        assert_eq!(id.to_string(), "some.plugin.42");
    }
}
