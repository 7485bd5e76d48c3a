//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like highlight ranges, ordinal
//! numbers, and row emphasis flags.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data.

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI: the
/// visible window of table rows, chrome info (header, footer, pagination),
/// and optional elements (search bar, detail line, empty state).
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Table rows visible in the current window of the current page.
    pub rows: Vec<DisplayRow>,

    /// Index of the cursor row within `rows`.
    pub selected_index: usize,

    /// Whether the leading ordinal ("No.") column is shown.
    pub show_numbers: bool,

    /// Header information (title, counts, build target).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Pagination bar information (rows-per-page, range, page count).
    pub pagination: PaginationInfo,

    /// Search bar information, present while in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Empty state message when no rows are available.
    pub empty_state: Option<EmptyState>,

    /// Detail line for the cursor row (exclusivity, notes), if any.
    pub detail: Option<String>,
}

/// Display information for a single table row.
///
/// All cell texts are pre-formatted; emphasis flags mirror the record
/// attributes that drive styling. Column fitting happens in the table
/// component, which knows the terminal width.
#[derive(Debug, Clone)]
pub struct DisplayRow {
    /// Display ordinal: `None` when the column is hidden, `Some(0)` when the
    /// record has no in-game listing position (rendered as "-").
    pub ordinal: Option<usize>,

    /// Evility name.
    pub name: String,

    /// Category label ("None" when unclassified).
    pub category: String,

    /// Effect description.
    pub description: String,

    /// Cost label ("-" when absent).
    pub cost: String,

    /// TYPE column label ("Unique" or "Generic").
    pub kind: String,

    /// Unlock/source text.
    pub source: String,

    /// Whether this row is under the cursor.
    pub is_selected: bool,

    /// Enemy-only record: bold name in the enemy color, tinted row.
    pub enemy_only: bool,

    /// DLC record: italic name.
    pub dlc: bool,

    /// Unique record: underlined TYPE cell.
    pub unique: bool,

    /// Character the record is exclusive to, if any (lock glyph).
    pub fixed_owner: Option<String>,

    /// Cannot be turned into a scroll (marker glyph).
    pub not_scrollable: bool,

    /// Locked for the current build: struck-through, dimmed, unpickable.
    pub locked: bool,

    /// Exclusive to the current build target: highlighted row background.
    pub exclusive: bool,

    /// Character ranges of search matches within `name`.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Pagination bar display information.
///
/// Mirrors the pagination strip of the table: the rows-per-page choice, the
/// visible record range, and the page position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Rows-per-page label ("30", "50", "70", or "All").
    pub rows_label: String,

    /// 1-based index of the first record on the page (0 when empty).
    pub first: usize,

    /// 1-based index of the last record on the page.
    pub last: usize,

    /// Total filtered record count.
    pub total: usize,

    /// Zero-based current page index.
    pub page: usize,

    /// Total page count (at least 1).
    pub page_count: usize,
}

/// Empty state message display information.
///
/// Shown when no rows are available (dataset not loaded, or nothing passes
/// the filters).
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No evilities match").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
