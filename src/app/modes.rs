//! Input mode state types for the application.
//!
//! This module defines the state machine enums that control user interaction
//! modes. These types determine which keybindings are active and how input is
//! processed.
//!
//! # State Machine
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: Default navigation, paging, and filter-toggle mode
//! - **Search**: Active text search with typing or result navigation focus

/// Focus state within search mode.
///
/// Determines whether search input is being typed or results are being
/// navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input and backspace; Enter picks the cursor row.
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts j/k for movement, Enter to pick, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), h/l (page), r (rows per page),
    /// / (search), Enter (pick), filter toggle letters, q (quit).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing or navigating results.
    Search(SearchFocus),
}
