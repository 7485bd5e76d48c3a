//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and worker responses, translating them into state changes and action
//! sequences. It is the primary control flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or the worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextPage`, `PrevPage`
//! - **Pagination**: `CycleRowsPerPage`
//! - **Selection**: `SelectEvility`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`,
//!   `ExitSearch`, `Char`, `Backspace`, `Escape`
//! - **Filtering**: `ToggleFilter`, `ToggleCategory`, `ToggleSearchField`,
//!   `ToggleNumbers`
//! - **Worker**: `WorkerResponse` with typed message variants

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{FilterToggle, SearchField};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the cursor down one row (wraps within the page).
    KeyDown,
    /// Moves the cursor up one row (wraps within the page).
    KeyUp,
    /// Advances to the next page of results.
    NextPage,
    /// Goes back one page of results.
    PrevPage,
    /// Advances to the next rows-per-page option and persists it.
    CycleRowsPerPage,
    /// Picks the row under the cursor for the current build.
    SelectEvility,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the result list (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,

    /// Flips one boolean attribute filter.
    ToggleFilter(FilterToggle),
    /// Flips the allowed-category entry at the given index into the sorted
    /// known-category list.
    ToggleCategory(usize),
    /// Flips one text-search field.
    ToggleSearchField(SearchField),
    /// Shows or hides the ordinal ("No.") column.
    ToggleNumbers,

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the plugin runtime.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI needs a repaint, and the side
/// effects to execute in order.
///
/// # Errors
///
/// Returns errors from state mutation methods; the current handlers are
/// infallible but the signature keeps the worker/storage error channel open.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            state.next_page();
            Ok((true, vec![]))
        }
        Event::PrevPage => {
            state.prev_page();
            Ok((true, vec![]))
        }
        Event::CycleRowsPerPage => {
            let rows_per_page = state.cycle_rows_per_page();
            tracing::debug!(rows_per_page = rows_per_page, "rows-per-page changed");
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::save_rows_per_page(
                    rows_per_page,
                ))],
            ))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SelectEvility => {
            use super::modes::InputMode;

            let Some(evility) = state.selected_evility() else {
                tracing::debug!("no evility selected");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    tracing::debug!("exiting search mode (no selection)");
                    state.input_mode = InputMode::Normal;
                    state.text_filter = String::new();
                    state.apply_filters();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            if state.is_locked(evility) {
                tracing::debug!(
                    evility = %evility.name,
                    owner = ?evility.fixed,
                    "evility locked by exclusivity, ignoring pick"
                );
                return Ok((false, vec![]));
            }

            tracing::debug!(
                evility = %evility.name,
                evility_id = evility.id,
                "evility picked"
            );

            Ok((
                false,
                vec![Action::AddToBuild {
                    evility: evility.clone(),
                }],
            ))
        }
        Event::SearchMode => {
            use super::modes::{InputMode, SearchFocus};
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.text_filter = String::new();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            use super::modes::{InputMode, SearchFocus};
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            use super::modes::{InputMode, SearchFocus};

            if state.text_filter.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_filters();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            use super::modes::InputMode;
            tracing::debug!(query = %state.text_filter, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.text_filter = String::new();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            use super::modes::InputMode;

            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.text_filter.push(*c);
            tracing::trace!(query = %state.text_filter, "search query updated");
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            use super::modes::InputMode;

            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.text_filter.pop();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Escape => {
            use super::modes::InputMode;
            state.input_mode = InputMode::Normal;
            state.text_filter = String::new();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ToggleFilter(which) => {
            state.filters.toggle(*which);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ToggleCategory(index) => {
            let Some(category) = state.known_categories.get(*index).cloned() else {
                tracing::debug!(index = index, "no category at toggle index");
                return Ok((false, vec![]));
            };
            state.filters.toggle_category(&category);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ToggleSearchField(which) => {
            state.searches.toggle(*which);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ToggleNumbers => {
            state.show_numbers = !state.show_numbers;
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::EvilitiesLoaded { evilities } => {
                if &state.evilities == evilities {
                    tracing::debug!("dataset unchanged, skipping render");
                    Ok((false, vec![]))
                } else {
                    tracing::debug!(record_count = evilities.len(), "dataset installed");
                    state.set_evilities(evilities.clone());
                    Ok((true, vec![]))
                }
            }
            WorkerResponse::PreferencesLoaded { rows_per_page } => match rows_per_page {
                Some(stored) if *stored != state.rows_per_page => {
                    tracing::debug!(rows_per_page = stored, "applying stored preference");
                    state.set_rows_per_page(*stored);
                    Ok((true, vec![]))
                }
                _ => Ok((false, vec![])),
            },
            WorkerResponse::RowsPerPageSaved { rows_per_page } => {
                tracing::debug!(rows_per_page = rows_per_page, "preference persisted");
                Ok((false, vec![]))
            }
            WorkerResponse::BuildUpdated { target, count } => {
                tracing::debug!(target = %target, build_size = count, "build updated");
                Ok((false, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("worker error: {}", message);
                Ok((true, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Evility;
    use crate::ui::theme::Theme;

    fn evility(id: u32) -> Evility {
        Evility {
            id,
            name: format!("Evility {id}"),
            category: Some("ATK".to_string()),
            description: format!("effect {id}"),
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

    fn state() -> AppState {
        let mut state = AppState::new(Theme::default(), false, None, true);
        state.set_evilities((1..=40).map(evility).collect());
        state
    }

    #[test]
    fn cycle_rows_per_page_emits_persist_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CycleRowsPerPage).unwrap();

        assert!(render);
        assert_eq!(state.rows_per_page, 50);
        assert_eq!(state.page, 0);
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::SaveRowsPerPage {
                rows_per_page: 50,
                ..
            })]
        ));
    }

    #[test]
    fn select_emits_add_to_build_with_record() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::SelectEvility).unwrap();

        match actions.as_slice() {
            [Action::AddToBuild { evility }] => assert_eq!(evility.id, 1),
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn locked_rows_emit_nothing_on_select() {
        let mut state = AppState::new(Theme::default(), true, Some("Etna".to_string()), true);
        let mut fixed = evility(1);
        fixed.fixed = Some("Pleinair".to_string());
        state.set_evilities(vec![fixed]);

        let (render, actions) = handle_event(&mut state, &Event::SelectEvility).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn typed_characters_filter_the_list() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "effect 12".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }

        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered[0].id, 12);

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.filtered.len(), 40);
        assert!(state.text_filter.is_empty());
    }

    #[test]
    fn characters_outside_search_mode_are_ignored() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.text_filter.is_empty());
    }

    #[test]
    fn stored_preference_overrides_default() {
        let mut state = state();
        let response = WorkerResponse::PreferencesLoaded {
            rows_per_page: Some(70),
        };
        let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        assert!(render);
        assert_eq!(state.rows_per_page, 70);
    }

    #[test]
    fn absent_preference_keeps_default() {
        let mut state = state();
        let response = WorkerResponse::PreferencesLoaded {
            rows_per_page: None,
        };
        let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

        assert!(!render);
        assert_eq!(state.rows_per_page, 30);
    }

    #[test]
    fn toggle_category_by_index() {
        let mut state = state();
        assert_eq!(state.known_categories, vec!["ATK".to_string()]);

        handle_event(&mut state, &Event::ToggleCategory(0)).unwrap();
        assert!(state.filtered.is_empty());

        handle_event(&mut state, &Event::ToggleCategory(0)).unwrap();
        assert_eq!(state.filtered.len(), 40);

        let (render, _) = handle_event(&mut state, &Event::ToggleCategory(9)).unwrap();
        assert!(!render);
    }

    #[test]
    fn reloaded_identical_dataset_skips_render() {
        let mut state = state();
        let same = state.evilities.clone();
        let response = WorkerResponse::EvilitiesLoaded { evilities: same };
        let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        assert!(!render);
    }
}
