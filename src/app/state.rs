//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with methods for filtering, ordinal numbering, pagination,
//! selection management, and UI view model generation. It is the single source
//! of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the evility dataset) from derived state
//! (filtered lists, page, selection) to maintain consistency and simplify
//! state transitions. View models are computed on-demand from state snapshots.
//!
//! # Derived Lists
//!
//! Two derived lists are maintained side by side:
//!
//! - `unsearched`: dataset after the boolean/category filter stage only.
//!   Display ordinals are computed against this list so numbers stay put
//!   while the user types a query.
//! - `filtered`: `unsearched` further restricted by the text query. This is
//!   the list that gets paginated and rendered.

use super::modes::{InputMode, SearchFocus};
use crate::domain::{Evility, FilterSet, SearchFields};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayRow, EmptyState, FooterInfo, HeaderInfo, PaginationInfo, SearchBarInfo, UiViewModel,
};
use std::collections::BTreeSet;

/// Rows-per-page choices offered by the cycle key; -1 is the unbounded "All".
pub const ROWS_PER_PAGE_OPTIONS: [i32; 4] = [30, 50, 70, -1];

/// Default rows-per-page when no stored preference exists.
pub const DEFAULT_ROWS_PER_PAGE: i32 = ROWS_PER_PAGE_OPTIONS[0];

/// Build target allowed to slot any fixed evility.
pub const UNRESTRICTED_TARGET: &str = "Prinny";

/// Central application state container.
///
/// Holds all transient UI state including the dataset, filter criteria,
/// pagination, selection, and mode information. Mutated by the event handler
/// in response to user input and worker responses.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Master evility list in dataset (in-game listing) order.
    ///
    /// Loaded once by the worker; never mutated afterwards.
    pub evilities: Vec<Evility>,

    /// Records passing the boolean filter stage and the text query.
    ///
    /// Recomputed by `apply_filters()`. This is the paginated, rendered list.
    pub filtered: Vec<Evility>,

    /// Records passing only the boolean filter stage.
    ///
    /// Basis for display ordinals; deliberately ignores the text query so
    /// numbers do not jump while the user types.
    pub unsearched: Vec<Evility>,

    /// Every category label present in the dataset, sorted.
    ///
    /// Indexed by the number-key category toggles.
    pub known_categories: Vec<String>,

    /// Boolean attribute toggles and the allowed-category set.
    pub filters: FilterSet,

    /// Which record fields the text query inspects.
    pub searches: SearchFields,

    /// Current free-text query.
    pub text_filter: String,

    /// Zero-based current page index.
    pub page: usize,

    /// Rows shown per page; -1 means unbounded.
    pub rows_per_page: i32,

    /// Zero-based cursor position within the current page slice.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Whether a build is in progress (exclusivity rules apply).
    pub building: bool,

    /// Target character of the build in progress.
    pub build_target: Option<String>,

    /// Whether to show the leading ordinal ("No.") column.
    pub show_numbers: bool,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state with an empty dataset.
    ///
    /// The dataset arrives later via the worker; until then every derived
    /// list is empty and the UI shows the loading empty-state.
    #[must_use]
    pub fn new(theme: Theme, building: bool, build_target: Option<String>, show_numbers: bool) -> Self {
        Self {
            evilities: vec![],
            filtered: vec![],
            unsearched: vec![],
            known_categories: vec![],
            filters: FilterSet::default(),
            searches: SearchFields::default(),
            text_filter: String::new(),
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            selected_index: 0,
            input_mode: InputMode::Normal,
            building,
            build_target,
            show_numbers,
            theme,
        }
    }

    /// Installs a freshly loaded dataset and recomputes derived state.
    ///
    /// On first load the allowed-category set is seeded with every category
    /// present, so the unfiltered table shows everything.
    pub fn set_evilities(&mut self, evilities: Vec<Evility>) {
        let first_load = self.evilities.is_empty();

        let categories: BTreeSet<String> = evilities
            .iter()
            .map(|e| e.category_label().to_string())
            .collect();
        self.known_categories = categories.iter().cloned().collect();

        if first_load {
            self.filters.categories = categories;
        }

        self.evilities = evilities;
        self.apply_filters();
    }

    /// Applies the boolean filter stage and the text query to the dataset.
    ///
    /// Rebuilds `unsearched` and `filtered`, resets the page to 0 whenever
    /// the filtered list size changes, and clamps page and selection to
    /// valid bounds.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!("apply_filters",
            total = self.evilities.len(),
            query_len = self.text_filter.len()
        )
        .entered();

        let unsearched: Vec<Evility> = self
            .evilities
            .iter()
            .filter(|e| self.filters.passes(e))
            .cloned()
            .collect();

        let filtered: Vec<Evility> = if self.text_filter.is_empty() {
            unsearched.clone()
        } else {
            let query_lower = self.text_filter.to_lowercase();
            unsearched
                .iter()
                .filter(|e| self.searches.matches(e, &query_lower))
                .cloned()
                .collect()
        };

        if filtered.len() != self.filtered.len() {
            self.page = 0;
            self.selected_index = 0;
        }

        self.unsearched = unsearched;
        self.filtered = filtered;

        self.page = self.page.min(self.page_count().saturating_sub(1));
        let page_len = self.page_slice().len();
        self.selected_index = self.selected_index.min(page_len.saturating_sub(1));

        tracing::debug!(
            unsearched_count = self.unsearched.len(),
            filtered_count = self.filtered.len(),
            page = self.page,
            "filters applied"
        );
    }

    /// Returns the display ordinal for a record.
    ///
    /// The ordinal is the 1-based position of the record within the
    /// boolean-filtered subset sharing its uniqueness flag, excluding
    /// fixed-to-character and enemy-only records; 0 when the record is not in
    /// that subset (rendered as "-"). Computed against `unsearched`, so the
    /// number is stable under text-query changes.
    #[must_use]
    pub fn list_number(&self, evility: &Evility) -> usize {
        self.unsearched
            .iter()
            .filter(|x| x.unique == evility.unique && x.fixed.is_none() && !x.enemy_only)
            .position(|x| x.id == evility.id)
            .map_or(0, |i| i + 1)
    }

    /// Number of pages for the current filtered list, at least 1.
    #[must_use]
    pub fn page_count(&self) -> usize {
        if self.rows_per_page <= 0 || self.filtered.is_empty() {
            return 1;
        }
        let per_page = self.rows_per_page as usize;
        (self.filtered.len() + per_page - 1) / per_page
    }

    /// Index of the first filtered record on the current page.
    #[must_use]
    pub fn page_start(&self) -> usize {
        if self.rows_per_page <= 0 {
            0
        } else {
            self.page * self.rows_per_page as usize
        }
    }

    /// The slice of the filtered list belonging to the current page.
    #[must_use]
    pub fn page_slice(&self) -> &[Evility] {
        if self.rows_per_page <= 0 {
            return &self.filtered;
        }
        let start = self.page_start().min(self.filtered.len());
        let end = (start + self.rows_per_page as usize).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Advances to the next page, if any. Resets the cursor to the page top.
    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            self.selected_index = 0;
        }
    }

    /// Goes back one page, if possible. Resets the cursor to the page top.
    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.selected_index = 0;
        }
    }

    /// Sets the rows-per-page choice and resets to the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: i32) {
        self.rows_per_page = rows_per_page;
        self.page = 0;
        self.selected_index = 0;
    }

    /// Advances to the next rows-per-page option and returns the new value.
    ///
    /// A stored preference outside the option list (any integer is accepted
    /// from storage) cycles back to the first option.
    pub fn cycle_rows_per_page(&mut self) -> i32 {
        let next = ROWS_PER_PAGE_OPTIONS
            .iter()
            .position(|&v| v == self.rows_per_page)
            .map_or(ROWS_PER_PAGE_OPTIONS[0], |i| {
                ROWS_PER_PAGE_OPTIONS[(i + 1) % ROWS_PER_PAGE_OPTIONS.len()]
            });
        self.set_rows_per_page(next);
        next
    }

    /// Moves the cursor down one row, wrapping within the current page.
    pub fn move_selection_down(&mut self) {
        let len = self.page_slice().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up one row, wrapping within the current page.
    pub fn move_selection_up(&mut self) {
        let len = self.page_slice().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the record under the cursor, if any.
    #[must_use]
    pub fn selected_evility(&self) -> Option<&Evility> {
        self.page_slice().get(self.selected_index)
    }

    /// Returns `true` when the record cannot be picked for the current build.
    ///
    /// A record is locked when a build is in progress for a specific target,
    /// the record is fixed to a different character, and the target is not
    /// the unrestricted one (Prinny builds may slot any fixed evility).
    #[must_use]
    pub fn is_locked(&self, evility: &Evility) -> bool {
        match (&self.build_target, &evility.fixed) {
            (Some(target), Some(owner)) => {
                self.building && target != UNRESTRICTED_TARGET && owner != target
            }
            _ => false,
        }
    }

    /// Returns `true` when the record is fixed to the current build target.
    #[must_use]
    pub fn is_exclusive_to_target(&self, evility: &Evility) -> bool {
        match &self.build_target {
            Some(target) => {
                self.building && target != UNRESTRICTED_TARGET && evility.is_exclusive_to(target)
            }
            None => false,
        }
    }

    /// Computes a renderable UI view model from current state and terminal
    /// height.
    ///
    /// Handles pagination slicing, windowing of the page around the cursor,
    /// per-row display computation, and chrome info (header, footer,
    /// pagination bar, search bar, detail line, empty states). Column fitting
    /// is width-dependent and happens in the table component.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize) -> UiViewModel {
        if self.filtered.is_empty() {
            return UiViewModel {
                rows: vec![],
                selected_index: 0,
                show_numbers: self.show_numbers,
                header: self.compute_header(),
                footer: self.compute_footer(),
                pagination: self.compute_pagination(),
                search_bar: self.compute_search_bar(),
                empty_state: Some(self.compute_empty_state()),
                detail: None,
            };
        }

        let slice = self.page_slice();
        let available = self.calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available / 2);
        let visible_end = (visible_start + available).min(slice.len());
        if visible_end - visible_start < available && slice.len() >= available {
            visible_start = visible_end.saturating_sub(available);
        }

        let display_rows: Vec<DisplayRow> = slice[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, evility)| {
                self.compute_display_row(evility, visible_start + relative_idx)
            })
            .collect();

        let selected_display_index = self.selected_index.saturating_sub(visible_start);

        UiViewModel {
            rows: display_rows,
            selected_index: selected_display_index,
            show_numbers: self.show_numbers,
            header: self.compute_header(),
            footer: self.compute_footer(),
            pagination: self.compute_pagination(),
            search_bar: self.compute_search_bar(),
            empty_state: None,
            detail: self.compute_detail(),
        }
    }

    /// Computes the display row for a single record on the current page.
    fn compute_display_row(&self, evility: &Evility, index_in_page: usize) -> DisplayRow {
        let is_selected = index_in_page == self.selected_index;
        let locked = self.is_locked(evility);
        let exclusive = self.is_exclusive_to_target(evility);

        let highlight_ranges = if matches!(self.input_mode, InputMode::Search(_))
            && !self.text_filter.is_empty()
            && self.searches.name
        {
            substring_ranges(&evility.name, &self.text_filter)
        } else {
            vec![]
        };

        DisplayRow {
            ordinal: self.show_numbers.then(|| self.list_number(evility)),
            name: evility.name.clone(),
            category: evility.category_label().to_string(),
            description: evility.description.clone(),
            cost: evility.cost_label(),
            kind: evility.kind_label().to_string(),
            source: evility.unlock.clone(),
            is_selected,
            enemy_only: evility.enemy_only,
            dlc: evility.dlc,
            unique: evility.unique,
            fixed_owner: evility.fixed.clone(),
            not_scrollable: evility.not_scrollable,
            locked,
            exclusive,
            highlight_ranges,
        }
    }

    /// Computes header information: title, counts, and the build target.
    fn compute_header(&self) -> HeaderInfo {
        let title = match (&self.build_target, self.building) {
            (Some(target), true) => {
                format!(" Evilities ({}) - building {} ", self.filtered.len(), target)
            }
            _ => format!(" Evilities ({}) ", self.filtered.len()),
        };
        HeaderInfo { title }
    }

    /// Computes footer keybinding hints for the current input mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: pick  Ctrl+n/p: navigate  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  Enter: pick".to_string()
            }
            InputMode::Normal => {
                "j/k: move  h/l: page  r: rows  /: search  Enter: pick  u/g/a/e/b/d: filters  q: quit"
                    .to_string()
            }
        };
        FooterInfo { keybindings }
    }

    /// Computes the pagination bar info for the current page.
    fn compute_pagination(&self) -> PaginationInfo {
        let total = self.filtered.len();
        let slice_len = self.page_slice().len();
        let first = if total == 0 { 0 } else { self.page_start() + 1 };
        let last = self.page_start() + slice_len;

        let rows_label = if self.rows_per_page <= 0 {
            "All".to_string()
        } else {
            self.rows_per_page.to_string()
        };

        PaginationInfo {
            rows_label,
            first,
            last,
            total,
            page: self.page,
            page_count: self.page_count(),
        }
    }

    /// Computes the search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.text_filter.clone(),
            })
        } else {
            None
        }
    }

    /// Computes the empty-state message for an empty filtered list.
    fn compute_empty_state(&self) -> EmptyState {
        if self.evilities.is_empty() {
            EmptyState {
                message: "No evilities loaded".to_string(),
                subtitle: "Check the data_path plugin setting".to_string(),
            }
        } else {
            EmptyState {
                message: "No evilities match".to_string(),
                subtitle: "Adjust the filters or clear the search".to_string(),
            }
        }
    }

    /// Computes the detail line for the record under the cursor.
    ///
    /// Shows exclusivity, scroll restriction, and free-form notes; `None`
    /// when the selected record has nothing to say.
    fn compute_detail(&self) -> Option<String> {
        let evility = self.selected_evility()?;
        let mut parts: Vec<String> = vec![];

        if let Some(owner) = &evility.fixed {
            parts.push(format!("Exclusive to {owner}"));
        }
        if evility.not_scrollable {
            parts.push("Can't be turned into a scroll".to_string());
        }
        if !evility.notes.is_empty() {
            parts.push(evility.notes.clone());
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("  |  "))
        }
    }

    /// Rows available for the table after subtracting UI chrome.
    ///
    /// Normal mode reserves 9 rows (blank, header, border, column headers,
    /// detail, pagination, border, footer, margin); search mode reserves 3
    /// more for the search box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let available = match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(9),
            InputMode::Search(_) => total_rows.saturating_sub(12),
        };
        if available == 0 {
            1
        } else {
            available
        }
    }
}

/// Finds character-index ranges where `query` occurs in `text`, ignoring
/// ASCII case. Used for search-match highlighting in the name column.
fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let haystack = text.to_ascii_lowercase();
    let needle = query.to_ascii_lowercase();
    let query_chars = needle.chars().count();

    haystack
        .match_indices(&needle)
        .map(|(byte_start, _)| {
            let char_start = text[..byte_start].chars().count();
            (char_start, char_start + query_chars)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evility(id: u32) -> Evility {
        Evility {
            id,
            name: format!("Evility {id}"),
            category: Some("ATK".to_string()),
            description: format!("effect {id}"),
            cost: Some(id),
            unlock: format!("source {id}"),
            unique: false,
            enemy_only: false,
            dlc: false,
            fixed: None,
            not_scrollable: false,
            not_in_game: false,
            notes: String::new(),
        }
    }

    fn state_with(evilities: Vec<Evility>) -> AppState {
        let mut state = AppState::new(Theme::default(), false, None, true);
        state.set_evilities(evilities);
        state
    }

    fn dataset() -> Vec<Evility> {
        let mut list = vec![];
        for id in 1..=5 {
            list.push(evility(id));
        }
        let mut unique = evility(6);
        unique.unique = true;
        unique.name = "Overlord's Wrath".to_string();
        list.push(unique);

        let mut fixed = evility(7);
        fixed.fixed = Some("Pleinair".to_string());
        list.push(fixed);

        let mut enemy = evility(8);
        enemy.enemy_only = true;
        list.push(enemy);

        let mut hidden = evility(9);
        hidden.not_in_game = true;
        list.push(hidden);
        list
    }

    #[test]
    fn filtered_output_satisfies_boolean_criteria() {
        let mut state = state_with(dataset());
        state.filters.unique = false;
        state.filters.enemy = false;
        state.apply_filters();

        assert!(!state.filtered.is_empty());
        for e in &state.filtered {
            assert!(state.filters.passes(e));
            assert!(!e.unique);
            assert!(!e.enemy_only);
        }
    }

    #[test]
    fn category_restriction_example() {
        // Records in categories A and B, filter allowing only A.
        let mut a = evility(1);
        a.category = Some("A".to_string());
        let mut b = evility(2);
        b.category = Some("B".to_string());

        let mut state = state_with(vec![a, b]);
        state.filters.categories.remove("B");
        state.apply_filters();

        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered[0].id, 1);
    }

    #[test]
    fn text_search_restricts_never_expands() {
        let mut state = state_with(dataset());
        let unrestricted: Vec<u32> = state.filtered.iter().map(|e| e.id).collect();

        state.text_filter = "effect 3".to_string();
        state.apply_filters();

        assert!(state.filtered.len() <= unrestricted.len());
        for e in &state.filtered {
            assert!(unrestricted.contains(&e.id));
        }
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered[0].id, 3);
    }

    #[test]
    fn ordinals_are_stable_under_text_query() {
        let mut state = state_with(dataset());
        let target = state.evilities[2].clone();
        let before = state.list_number(&target);
        assert!(before > 0);

        state.text_filter = "Evility 5".to_string();
        state.apply_filters();

        assert_eq!(state.list_number(&target), before);
    }

    #[test]
    fn fixed_and_enemy_records_have_no_ordinal() {
        let state = state_with(dataset());
        let fixed = state.evilities.iter().find(|e| e.fixed.is_some()).unwrap();
        let enemy = state.evilities.iter().find(|e| e.enemy_only).unwrap();

        assert_eq!(state.list_number(fixed), 0);
        assert_eq!(state.list_number(enemy), 0);
    }

    #[test]
    fn unique_and_generic_ordinals_count_separately() {
        let state = state_with(dataset());
        let unique = state.evilities.iter().find(|e| e.unique).unwrap();
        // The only unique record is number 1 of the unique listing even
        // though five generic records precede it in the dataset.
        assert_eq!(state.list_number(unique), 1);
    }

    #[test]
    fn changing_rows_per_page_resets_page() {
        let mut state = state_with((1..=100).map(evility).collect());
        state.next_page();
        assert_eq!(state.page, 1);

        let next = state.cycle_rows_per_page();
        assert_eq!(next, 50);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn rows_per_page_cycles_through_all_options() {
        let mut state = state_with(vec![]);
        assert_eq!(state.rows_per_page, 30);
        assert_eq!(state.cycle_rows_per_page(), 50);
        assert_eq!(state.cycle_rows_per_page(), 70);
        assert_eq!(state.cycle_rows_per_page(), -1);
        assert_eq!(state.cycle_rows_per_page(), 30);
    }

    #[test]
    fn stored_off_list_preference_cycles_to_first_option() {
        let mut state = state_with(vec![]);
        state.set_rows_per_page(42);
        assert_eq!(state.cycle_rows_per_page(), 30);
    }

    #[test]
    fn filtered_size_change_resets_page() {
        let mut state = state_with((1..=100).map(evility).collect());
        state.next_page();
        assert_eq!(state.page, 1);

        state.text_filter = "effect 1".to_string();
        state.apply_filters();
        assert_eq!(state.page, 0);
    }

    #[test]
    fn unbounded_rows_per_page_is_a_single_page() {
        let mut state = state_with((1..=100).map(evility).collect());
        state.set_rows_per_page(-1);
        assert_eq!(state.page_count(), 1);
        assert_eq!(state.page_slice().len(), 100);
    }

    #[test]
    fn page_slicing_is_bounded() {
        let mut state = state_with((1..=70).map(evility).collect());
        assert_eq!(state.page_count(), 3);
        state.next_page();
        state.next_page();
        assert_eq!(state.page_slice().len(), 10);
        // Already on the last page.
        state.next_page();
        assert_eq!(state.page, 2);
    }

    #[test]
    fn locked_rows_require_building_a_different_target() {
        let mut state = state_with(dataset());
        let fixed = state
            .evilities
            .iter()
            .find(|e| e.fixed.is_some())
            .unwrap()
            .clone();

        // Not building: nothing is locked.
        assert!(!state.is_locked(&fixed));

        state.building = true;
        state.build_target = Some("Etna".to_string());
        assert!(state.is_locked(&fixed));
        assert!(!state.is_exclusive_to_target(&fixed));

        state.build_target = Some("Pleinair".to_string());
        assert!(!state.is_locked(&fixed));
        assert!(state.is_exclusive_to_target(&fixed));

        // The unrestricted target may slot anything.
        state.build_target = Some(UNRESTRICTED_TARGET.to_string());
        assert!(!state.is_locked(&fixed));
    }

    #[test]
    fn selection_wraps_within_page() {
        let mut state = state_with((1..=3).map(evility).collect());
        assert_eq!(state.selected_index, 0);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn viewmodel_marks_ordinals_and_selection() {
        let state = state_with(dataset());
        let vm = state.compute_viewmodel(30);

        assert!(vm.empty_state.is_none());
        assert!(vm.rows[0].is_selected);
        assert_eq!(vm.rows[0].ordinal, Some(1));
        assert_eq!(vm.pagination.first, 1);
        assert_eq!(vm.pagination.total, state.filtered.len());
    }

    #[test]
    fn viewmodel_hides_ordinals_when_disabled() {
        let mut state = state_with(dataset());
        state.show_numbers = false;
        let vm = state.compute_viewmodel(30);
        assert!(vm.rows[0].ordinal.is_none());
        assert!(!vm.show_numbers);
    }

    #[test]
    fn substring_ranges_find_case_insensitive_matches() {
        assert_eq!(substring_ranges("Macrocosm", "macro"), vec![(0, 5)]);
        assert_eq!(substring_ranges("aAaA", "aa"), vec![(0, 2), (2, 4)]);
        assert!(substring_ranges("Macrocosm", "xyz").is_empty());
        assert!(substring_ranges("Macrocosm", "").is_empty());
    }
}
