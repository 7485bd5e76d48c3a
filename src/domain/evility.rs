//! Evility domain model.
//!
//! This module defines the core `Evility` type: a named ability record from the
//! game data that can be browsed in the table and slotted into a character
//! build. Records are immutable inputs deserialized from the dataset file; the
//! application only derives filtered and annotated views of them.

use serde::{Deserialize, Serialize};

/// Display label used when a record carries no category.
pub const NO_CATEGORY: &str = "None";

/// A single evility record from the game dataset.
///
/// Field names follow the dataset's camelCase JSON keys. Most attributes are
/// optional in the raw data and default to "absent" (`None`, `false`, empty
/// string) so that partially-annotated records still load.
///
/// # Fields
///
/// - `id`: Stable numeric identifier, used for build membership
/// - `name`: Display name
/// - `category`: Evility category, `None` when unclassified
/// - `description`: Effect text
/// - `cost`: Slot cost, `None` for costless or fixed evilities
/// - `unlock`: How the evility is obtained (the "source" search field)
/// - `unique`: Unique evility (per-character) vs. generic
/// - `enemy_only`: Only ever appears on enemies
/// - `dlc`: Part of paid DLC rather than the base game
/// - `fixed`: Name of the character this evility is exclusive to
/// - `not_scrollable`: Cannot be turned into a scroll
/// - `not_in_game`: Data-mined but unobtainable; never displayed
/// - `notes`: Free-form annotation shown in the detail line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evility {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub description: String,
    #[serde(default)]
    pub cost: Option<u32>,
    pub unlock: String,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub enemy_only: bool,
    #[serde(default)]
    pub dlc: bool,
    #[serde(default)]
    pub fixed: Option<String>,
    #[serde(default)]
    pub not_scrollable: bool,
    #[serde(default)]
    pub not_in_game: bool,
    #[serde(default)]
    pub notes: String,
}

impl Evility {
    /// Returns the category, substituting [`NO_CATEGORY`] for records without one.
    ///
    /// Filtering and display both operate on this label, so an absent category
    /// behaves exactly like an explicit "None".
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(NO_CATEGORY)
    }

    /// Returns the TYPE column label: "Unique" or "Generic".
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        if self.unique {
            "Unique"
        } else {
            "Generic"
        }
    }

    /// Returns the COST column label, "-" when the record has no cost.
    #[must_use]
    pub fn cost_label(&self) -> String {
        self.cost.map_or_else(|| "-".to_string(), |c| c.to_string())
    }

    /// Returns `true` if this evility is fixed to exactly the given target.
    #[must_use]
    pub fn is_exclusive_to(&self, target: &str) -> bool {
        self.fixed.as_deref() == Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(id: u32, name: &str) -> Evility {
        Evility {
            id,
            name: name.to_string(),
            category: None,
            description: String::new(),
            cost: None,
            unlock: String::new(),
            unique: false,
            enemy_only: false,
            dlc: false,
            fixed: None,
            not_scrollable: false,
            not_in_game: false,
            notes: String::new(),
        }
    }

    #[test]
    fn category_label_defaults_to_none() {
        let mut e = minimal(1, "Violence");
        assert_eq!(e.category_label(), "None");
        e.category = Some("ATK".to_string());
        assert_eq!(e.category_label(), "ATK");
    }

    #[test]
    fn cost_label_uses_dash_for_absent_cost() {
        let mut e = minimal(2, "Overload");
        assert_eq!(e.cost_label(), "-");
        e.cost = Some(12);
        assert_eq!(e.cost_label(), "12");
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let json = r#"{
            "id": 7,
            "name": "Bladed Bravery",
            "description": "Increase ATK by 20%.",
            "unlock": "Learned at level 10",
            "enemyOnly": true,
            "notScrollable": true
        }"#;
        let e: Evility = serde_json::from_str(json).unwrap();
        assert!(e.enemy_only);
        assert!(e.not_scrollable);
        assert!(!e.dlc);
        assert_eq!(e.category, None);
        assert_eq!(e.kind_label(), "Generic");
    }
}
