//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zevility
//! library and the Zellij plugin system. It implements the `ZellijPlugin` and
//! `ZellijWorker` traits to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! The plugin uses Zellij's worker thread support for background I/O:
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  <- UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  ZevilityWorker  │   │  <- Dataset loading
//! │  │  (worker thread) │   │  <- Preference/build storage
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `CustomMessage`, permission events
//! 3. **Permissions Granted**: Request stored preferences and the dataset
//! 4. **Update**: Handle events, delegate to the library layer
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//! - `Alt+n` / `Alt+d` / `Alt+s`: Toggle searching name / description / source
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move cursor
//! - `h`/`Left`, `l`/`Right`: Previous / next page
//! - `r`: Cycle rows per page (30 / 50 / 70 / All)
//! - `Enter`: Pick the evility under the cursor
//! - `/`: Enter search mode
//! - `u`/`g`/`a`/`e`/`b`/`d`: Toggle unique / generic / learnable / enemy /
//!   base-game / DLC filters
//! - `N` (shift): Toggle the ordinal column
//! - `1`-`9`, `0`: Toggle the nth category
//! - `q`: Close the plugin
//!
//! In search mode:
//! - Printable keys: Type into the query
//! - `Tab`: Move focus to the results
//! - `Enter`: Pick the cursor row
//! - `Esc`: Exit search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use zevility::domain::{FilterToggle, SearchField};
use zevility::worker::{WorkerMessage, WorkerResponse, ZevilityWorker};
use zevility::{handle_event, Action, Config, Event, InputMode, SearchFocus};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(ZevilityWorker, zevility_worker, ZEVILITY_WORKER);

/// Build name used when no build target is configured.
const SCRATCH_BUILD_TARGET: &str = "scratch";

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication and the configured dataset location.
struct State {
    /// Core application state from the library layer.
    app: zevility::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Configured dataset path (host terms, `~` unexpanded).
    data_path: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: zevility::initialize(&default_config),
            worker_name: "zevility".to_string(),
            data_path: default_config.data_path,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// tracing and application state, requests permissions, and subscribes to
    /// events. The dataset itself is requested once permissions are granted.
    ///
    /// # Permissions
    ///
    /// - `ChangeApplicationState`: Hide the plugin pane on close
    /// - `FullHdAccess`: Read the dataset file and the storage file
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zevility::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(data_path = %config.data_path, build_target = ?config.build_target, "parsed configuration");
        self.app = zevility::initialize(&config);
        self.data_path = config.data_path;
        tracing::debug!("app state initialized");

        request_permission(&[
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI by delegating to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zevility::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// Key interpretation depends on the current input mode: letters that
    /// toggle filters in normal mode type into the query in search mode.
    #[allow(clippy::too_many_lines)]
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        if key.has_modifiers(&[KeyModifier::Alt]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::ToggleSearchField(SearchField::Name)),
                BareKey::Char('d') => Some(Event::ToggleSearchField(SearchField::Description)),
                BareKey::Char('s') => Some(Event::ToggleSearchField(SearchField::Source)),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Search(SearchFocus::Typing) => Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::SelectEvility,
                BareKey::Backspace => Event::Backspace,
                BareKey::Tab => Event::FocusResults,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Search(SearchFocus::Navigating) => Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::SelectEvility,
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Left | BareKey::Char('h') => Event::PrevPage,
                BareKey::Right | BareKey::Char('l') => Event::NextPage,
                BareKey::Char('/') => Event::FocusSearchBar,
                _ => return None,
            }),
            InputMode::Normal => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Left | BareKey::Char('h') => Event::PrevPage,
                BareKey::Right | BareKey::Char('l') => Event::NextPage,
                BareKey::Enter => Event::SelectEvility,
                BareKey::Esc => Event::Escape,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('r') => Event::CycleRowsPerPage,
                BareKey::Char('u') => Event::ToggleFilter(FilterToggle::Unique),
                BareKey::Char('g') => Event::ToggleFilter(FilterToggle::Generic),
                BareKey::Char('a') => Event::ToggleFilter(FilterToggle::Learnable),
                BareKey::Char('e') => Event::ToggleFilter(FilterToggle::Enemy),
                BareKey::Char('b') => Event::ToggleFilter(FilterToggle::BaseGame),
                BareKey::Char('d') => Event::ToggleFilter(FilterToggle::Dlc),
                BareKey::Char('N') => Event::ToggleNumbers,
                BareKey::Char(c @ '0'..='9') => {
                    // 1-9 toggle the first nine categories, 0 the tenth.
                    let digit = c.to_digit(10)?;
                    let index = if digit == 0 { 9 } else { (digit - 1) as usize };
                    Event::ToggleCategory(index)
                }
                _ => return None,
            }),
        }
    }

    /// Handles permission request results.
    ///
    /// Once permissions are granted, the worker is asked for the stored
    /// preferences and the evility dataset.
    fn handle_permission_result(&self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - requesting data");
                self.post_worker_message(&WorkerMessage::load_preferences());
                self.post_worker_message(&WorkerMessage::load_evilities(self.data_path.clone()));
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - plugin functionality limited");
            }
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => Some(Event::WorkerResponse(response)),
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends it via Zellij's IPC system.
    /// Serialization errors are logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close the plugin pane
    /// - `AddToBuild`: Persist the picked evility into the current target's
    ///   build via the worker
    /// - `PostToWorker`: Send an IPC message to the worker thread
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::AddToBuild { ref evility } => {
                let target = self
                    .app
                    .build_target
                    .clone()
                    .unwrap_or_else(|| SCRATCH_BUILD_TARGET.to_string());

                tracing::debug!(
                    evility = %evility.name,
                    evility_id = evility.id,
                    target = %target,
                    "adding evility to build"
                );

                self.post_worker_message(&WorkerMessage::add_to_build(target, evility.id));
            }
            Action::PostToWorker(ref message) => {
                tracing::debug!(message = ?message, "posting message to worker");
                self.post_worker_message(message);
            }
        }
    }
}
