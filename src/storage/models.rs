//! Storage record models for the persistence layer.
//!
//! This module defines the raw storage record types used for persistence
//! operations: the user preferences (currently just the rows-per-page choice)
//! and the per-target build records that accumulate selected evilities.

use serde::{Deserialize, Deserializer, Serialize};

/// Persisted user preferences.
///
/// The rows-per-page value is the only preference today. It is deserialized
/// leniently: a JSON number or a numeric string both load, anything else is
/// treated as unset so a hand-edited or corrupted file falls back to the
/// default instead of failing the whole storage load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Rows shown per table page; -1 means unbounded. `None` when never set
    /// or when the stored value was not a number.
    #[serde(default, deserialize_with = "lenient_rows_per_page")]
    pub rows_per_page: Option<i32>,

    /// Unix timestamp of the last preference write.
    #[serde(default)]
    pub updated_at: i64,
}

/// Accepts a number, a numeric string, or anything else (ignored).
fn lenient_rows_per_page<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    Ok(parsed)
}

/// A character build: the evilities picked for one build target.
///
/// Builds are keyed by target name in storage. The id list preserves pick
/// order and never contains duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Build target (character) this build belongs to.
    pub target: String,

    /// Ids of the evilities in the build, in pick order.
    pub evility_ids: Vec<u32>,

    /// Unix timestamp of the last modification.
    pub updated_at: i64,
}

impl BuildRecord {
    /// Creates an empty build for the given target, stamped with the current time.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            evility_ids: Vec::new(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Adds an evility id if not already present. Returns `true` when the
    /// build changed.
    pub fn add(&mut self, evility_id: u32) -> bool {
        if self.evility_ids.contains(&evility_id) {
            return false;
        }
        self.evility_ids.push(evility_id);
        self.updated_at = chrono::Utc::now().timestamp();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_per_page_accepts_number() {
        let prefs: Preferences = serde_json::from_str(r#"{"rows_per_page": 50}"#).unwrap();
        assert_eq!(prefs.rows_per_page, Some(50));
    }

    #[test]
    fn rows_per_page_accepts_numeric_string() {
        let prefs: Preferences = serde_json::from_str(r#"{"rows_per_page": "70"}"#).unwrap();
        assert_eq!(prefs.rows_per_page, Some(70));

        let all: Preferences = serde_json::from_str(r#"{"rows_per_page": "-1"}"#).unwrap();
        assert_eq!(all.rows_per_page, Some(-1));
    }

    #[test]
    fn rows_per_page_ignores_junk() {
        let prefs: Preferences = serde_json::from_str(r#"{"rows_per_page": "plenty"}"#).unwrap();
        assert_eq!(prefs.rows_per_page, None);

        let prefs: Preferences = serde_json::from_str(r#"{"rows_per_page": [30]}"#).unwrap();
        assert_eq!(prefs.rows_per_page, None);

        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs.rows_per_page, None);
    }

    #[test]
    fn build_add_is_idempotent() {
        let mut build = BuildRecord::new("Pleinair");
        assert!(build.add(3));
        assert!(build.add(5));
        assert!(!build.add(3));
        assert_eq!(build.evility_ids, vec![3, 5]);
    }
}
