//! Filter criteria and matching predicates.
//!
//! This module defines the boolean filter set and the free-text search-field
//! toggles applied to the evility list, together with the predicates that
//! decide whether a record passes them. The predicates are pure functions of a
//! record and the criteria; list assembly lives in the application state.
//!
//! # Filter Stages
//!
//! Filtering happens in two stages:
//!
//! 1. **Boolean stage** ([`FilterSet::passes`]): attribute toggles, the
//!    allowed-category set, and the unconditional exclusion of records flagged
//!    as not obtainable in-game.
//! 2. **Text stage** ([`SearchFields::matches`]): a case-insensitive substring
//!    test over the enabled search fields, applied only when a query is
//!    present. The text stage can only shrink the boolean-stage result.

use crate::domain::Evility;
use std::collections::BTreeSet;

/// Boolean attribute toggles plus the allowed-category set.
///
/// Each toggle pair is inclusive: disabling `unique` hides unique evilities,
/// disabling `generic` hides generic ones, and with both enabled everything
/// passes that pair. A record's category label must be in `categories`;
/// an empty set therefore hides every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    /// Show unique (per-character) evilities.
    pub unique: bool,
    /// Show generic evilities.
    pub generic: bool,
    /// Show learnable evilities (everything not enemy-only).
    pub learnable: bool,
    /// Show enemy-only evilities.
    pub enemy: bool,
    /// Show base-game evilities.
    pub base_game: bool,
    /// Show DLC evilities.
    pub dlc: bool,
    /// Category labels allowed through the filter.
    pub categories: BTreeSet<String>,
}

impl Default for FilterSet {
    /// All toggles enabled, no categories.
    ///
    /// The category set is seeded from the dataset once it loads; until then
    /// the empty set blocks everything, which matches the pre-data render.
    fn default() -> Self {
        Self {
            unique: true,
            generic: true,
            learnable: true,
            enemy: true,
            base_game: true,
            dlc: true,
            categories: BTreeSet::new(),
        }
    }
}

impl FilterSet {
    /// Creates a filter set with every toggle enabled and the given categories allowed.
    #[must_use]
    pub fn allowing(categories: BTreeSet<String>) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    /// Returns `true` if the record passes every enabled boolean criterion.
    ///
    /// Records flagged `not_in_game` never pass, regardless of toggles.
    #[must_use]
    pub fn passes(&self, evility: &Evility) -> bool {
        (self.unique || !evility.unique)
            && (self.generic || evility.unique)
            && (self.learnable || evility.enemy_only)
            && (self.enemy || !evility.enemy_only)
            && (self.base_game || evility.dlc)
            && (self.dlc || !evility.dlc)
            && self.categories.contains(evility.category_label())
            && !evility.not_in_game
    }
}

/// Identifies one boolean toggle of a [`FilterSet`], for toggle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterToggle {
    Unique,
    Generic,
    Learnable,
    Enemy,
    BaseGame,
    Dlc,
}

impl FilterSet {
    /// Flips the toggle named by `which`.
    pub fn toggle(&mut self, which: FilterToggle) {
        let flag = match which {
            FilterToggle::Unique => &mut self.unique,
            FilterToggle::Generic => &mut self.generic,
            FilterToggle::Learnable => &mut self.learnable,
            FilterToggle::Enemy => &mut self.enemy,
            FilterToggle::BaseGame => &mut self.base_game,
            FilterToggle::Dlc => &mut self.dlc,
        };
        *flag = !*flag;
    }

    /// Adds the category if absent, removes it if present.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }
}

/// Which record fields free-text search inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFields {
    /// Match against the evility name.
    pub name: bool,
    /// Match against the description text.
    pub description: bool,
    /// Match against the unlock/source text.
    pub source: bool,
}

impl Default for SearchFields {
    /// All fields searched.
    fn default() -> Self {
        Self {
            name: true,
            description: true,
            source: true,
        }
    }
}

/// Identifies one search-field toggle, for toggle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Description,
    Source,
}

impl SearchFields {
    /// Returns `true` if any enabled field contains `query_lower` as a
    /// case-insensitive substring.
    ///
    /// `query_lower` must already be lowercased; the caller lowercases once
    /// per filter pass rather than once per record.
    #[must_use]
    pub fn matches(&self, evility: &Evility, query_lower: &str) -> bool {
        (self.name && evility.name.to_lowercase().contains(query_lower))
            || (self.description && evility.description.to_lowercase().contains(query_lower))
            || (self.source && evility.unlock.to_lowercase().contains(query_lower))
    }

    /// Flips the field named by `which`.
    pub fn toggle(&mut self, which: SearchField) {
        let flag = match which {
            SearchField::Name => &mut self.name,
            SearchField::Description => &mut self.description,
            SearchField::Source => &mut self.source,
        };
        *flag = !*flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evility(id: u32, category: &str) -> Evility {
        Evility {
            id,
            name: format!("evility-{id}"),
            category: Some(category.to_string()),
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

    fn all_categories() -> BTreeSet<String> {
        ["A", "B", "None"].iter().map(ToString::to_string).collect()
    }

    #[test]
    fn category_restriction_is_exact() {
        let mut filters = FilterSet::allowing(all_categories());
        filters.categories.remove("B");

        let a = evility(1, "A");
        let b = evility(2, "B");
        assert!(filters.passes(&a));
        assert!(!filters.passes(&b));
    }

    #[test]
    fn toggle_pairs_are_inclusive() {
        let filters = FilterSet::allowing(all_categories());
        let mut unique = evility(1, "A");
        unique.unique = true;
        let generic = evility(2, "A");

        // Both sides of a pair enabled: everything passes.
        assert!(filters.passes(&unique));
        assert!(filters.passes(&generic));

        let mut no_unique = filters.clone();
        no_unique.toggle(FilterToggle::Unique);
        assert!(!no_unique.passes(&unique));
        assert!(no_unique.passes(&generic));

        let mut no_generic = filters;
        no_generic.toggle(FilterToggle::Generic);
        assert!(no_generic.passes(&unique));
        assert!(!no_generic.passes(&generic));
    }

    #[test]
    fn dlc_and_enemy_pairs_filter_both_directions() {
        let filters = FilterSet::allowing(all_categories());
        let mut dlc = evility(1, "A");
        dlc.dlc = true;
        let mut enemy = evility(2, "A");
        enemy.enemy_only = true;

        let mut base_only = filters.clone();
        base_only.toggle(FilterToggle::Dlc);
        assert!(!base_only.passes(&dlc));

        let mut dlc_only = filters.clone();
        dlc_only.toggle(FilterToggle::BaseGame);
        assert!(dlc_only.passes(&dlc));
        assert!(!dlc_only.passes(&evility(3, "A")));

        let mut learnable_only = filters;
        learnable_only.toggle(FilterToggle::Enemy);
        assert!(!learnable_only.passes(&enemy));
    }

    #[test]
    fn not_in_game_records_never_pass() {
        let filters = FilterSet::allowing(all_categories());
        let mut hidden = evility(1, "A");
        hidden.not_in_game = true;
        assert!(!filters.passes(&hidden));
    }

    #[test]
    fn search_respects_enabled_fields() {
        let mut e = evility(1, "A");
        e.name = "Macrocosm".to_string();
        e.description = "Nullify all evilities".to_string();
        e.unlock = "Story: chapter 13".to_string();

        let all = SearchFields::default();
        assert!(all.matches(&e, "macro"));
        assert!(all.matches(&e, "nullify"));
        assert!(all.matches(&e, "chapter"));

        let name_only = SearchFields {
            name: true,
            description: false,
            source: false,
        };
        assert!(name_only.matches(&e, "macro"));
        assert!(!name_only.matches(&e, "nullify"));
        assert!(!name_only.matches(&e, "chapter"));
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut e = evility(1, "A");
        e.name = "Twilight Shadow".to_string();
        let fields = SearchFields::default();
        assert!(fields.matches(&e, "twilight sh"));
        assert!(!fields.matches(&e, "twilights"));
    }
}
