//! Zevility: A Zellij plugin for browsing evility data and planning builds.
//!
//! Zevility renders the evility table of a Disgaea-style character-build
//! planner inside a Zellij pane:
//! - Boolean and category filtering with free-text search over selectable
//!   fields (name, description, source)
//! - Stable in-game ordinal numbers that don't jump while searching
//! - Pagination with a persisted rows-per-page preference (30/50/70/All)
//! - Flag-derived row styling (enemy-only, DLC, exclusivity locks)
//! - Picking a row adds the evility to the current build
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  <- Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  <- State machine
//! │  - Event handling                                   │  <- Filtering, paging
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON I/O    │   │ - Dataset load│
//! │ - Theming     │   │ - Preferences │   │ - IPC bridge  │
//! │ - Components  │   │ - Builds      │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Evility model + filters (domain/)                │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  <- Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Evility, filters, errors)
//! - [`infrastructure`]: Platform-specific utilities (sandbox paths)
//! - [`storage`]: JSON file persistence for preferences and builds
//! - [`worker`]: Background worker for dataset and storage I/O
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zevility.wasm" {
//!         data_path "~/.config/zellij/zevility/evilities.json"
//!         build_target "Pleinair"
//!         building "true"
//!         show_numbers "true"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState`, subscribe to Zellij events
//! 2. **Permissions Granted**: post `LoadPreferences` and `LoadEvilities`
//!    messages to the worker
//! 3. **Worker Processing**: read the dataset file and the stored
//!    preferences, respond with typed messages
//! 4. **UI Rendering**: compute the view model, render components (header,
//!    table, pagination, footer), handle user input
//!
//! # Key Design Decisions
//!
//! ## Stable Ordinals
//!
//! The ordinal shown in the "No." column is a record's position in the
//! player's in-game evility listing. It is computed against the
//! boolean-filtered list only, never the text-filtered one, so numbers stay
//! put while the user types a query.
//!
//! ## Worker-Based I/O
//!
//! Dataset parsing and preference writes run in a separate Zellij worker
//! thread, keeping the render loop free of file I/O. Messages between the
//! threads are JSON and carry OpenTelemetry trace context.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models: a clear boundary between state
//! and display that keeps filtering and pagination testable without a
//! terminal.
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Evility, Result, ZevilityError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default location of the evility dataset file, in host terms.
pub const DEFAULT_DATA_PATH: &str = "~/.config/zellij/zevility/evilities.json";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zevility.wasm" {
///     data_path "~/my-data/evilities.json"
///     build_target "Prinny"
///     building "true"
///     show_numbers "false"
///     theme "catppuccin-latte"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the evility dataset JSON file.
    ///
    /// `~` is expanded to the sandbox host mount. Default:
    /// [`DEFAULT_DATA_PATH`].
    pub data_path: String,

    /// Target character of the build in progress, if any.
    ///
    /// Controls exclusivity locking and highlighting, and names the build
    /// that picked evilities are added to.
    pub build_target: Option<String>,

    /// Whether a build is in progress.
    ///
    /// Exclusivity rules only apply while building. Default: `false`.
    pub building: bool,

    /// Whether to show the leading ordinal ("No.") column. Default: `true`.
    pub show_numbers: bool,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            build_target: None,
            building: false,
            show_numbers: true,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts and parses typed values
    /// with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `data_path`: non-empty string, defaults to [`DEFAULT_DATA_PATH`]
    /// - `build_target`: any non-empty string
    /// - `building`, `show_numbers`: "true"/"false", falling back to the
    ///   default on anything else
    /// - `theme`, `theme_file`, `trace_level`: passed through as options
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zevility::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("build_target".to_string(), "Pleinair".to_string());
    /// map.insert("building".to_string(), "true".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.build_target.as_deref(), Some("Pleinair"));
    /// assert!(config.building);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let data_path = config
            .get("data_path")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.data_path);

        let build_target = config
            .get("build_target")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let building = config
            .get("building")
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(defaults.building);

        let show_numbers = config
            .get("show_numbers")
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(defaults.show_numbers);

        Self {
            data_path,
            build_target,
            building,
            show_numbers,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with the resolved theme and an empty dataset
/// (populated later by the worker).
///
/// # Theme Resolution
///
/// `theme_file` takes precedence over `theme_name`; both fall back to the
/// default theme on load failure, with a debug log explaining why.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zevility plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(
        theme,
        config.building,
        config.build_target.clone(),
        config.show_numbers,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_survive_malformed_values() {
        let mut map = BTreeMap::new();
        map.insert("building".to_string(), "yes please".to_string());
        map.insert("show_numbers".to_string(), "0".to_string());
        map.insert("data_path".to_string(), "  ".to_string());

        let config = Config::from_zellij(&map);
        assert!(!config.building);
        assert!(config.show_numbers);
        assert_eq!(config.data_path, DEFAULT_DATA_PATH);
    }

    #[test]
    fn config_parses_typed_values() {
        let mut map = BTreeMap::new();
        map.insert("data_path".to_string(), "~/ev.json".to_string());
        map.insert("building".to_string(), "true".to_string());
        map.insert("show_numbers".to_string(), "false".to_string());
        map.insert("theme".to_string(), "catppuccin-latte".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.data_path, "~/ev.json");
        assert!(config.building);
        assert!(!config.show_numbers);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    }

    #[test]
    fn initialize_uses_config_flags() {
        let config = Config {
            building: true,
            build_target: Some("Etna".to_string()),
            show_numbers: false,
            ..Config::default()
        };

        let state = initialize(&config);
        assert!(state.building);
        assert_eq!(state.build_target.as_deref(), Some("Etna"));
        assert!(!state.show_numbers);
        assert!(state.evilities.is_empty());
    }
}
