//! Carfinder: a Zellij plugin for browsing a car inventory.
//!
//! Carfinder fetches a car list from an HTTP endpoint once per session and
//! provides:
//! - Case-insensitive substring search over name and brand
//! - Fuel and body facet filters whose options always reflect the full
//!   dataset
//! - Stable price sorting (ascending/descending) and pagination
//! - A persisted, order-preserving wishlist with a JSON snapshot on disk
//! - A detail overlay per car and a dark/light theme toggle with a persisted
//!   flag
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - Derived-view computation (pure)                  │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON files  │   │ - Disk I/O    │
//! │ - Theming     │   │ - Store trait │   │ - IPC bridge  │
//! │ - Components  │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Car and wishlist models (domain/)                │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/carfinder.wasm" {
//!         endpoint "http://localhost:5000/cars"
//!         page_size "10"
//!         theme "dark"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState`, request permissions, subscribe to events
//! 2. **Permission Grant**: post the startup reads (wishlist, theme flag)
//!    to the worker and issue the single inventory `web_request`
//! 3. **Fetch Completion**: one `WebRequestResult` event populates the
//!    dataset (or logs the failure and leaves it empty)
//! 4. **Interaction**: key events mutate filter/wishlist state, the derived
//!    view is recomputed explicitly, and the UI re-renders
//!
//! # Key Design Decisions
//!
//! ## Pure derived view
//!
//! Filtering, sorting, facet extraction, and paging live in one pure
//! function ([`app::compute_view`]) taking the full dataset and the filter
//! state. The shell recomputes it after each accepted mutation; nothing is
//! cached across events except the result itself.
//!
//! ## Single persistence boundary
//!
//! The wishlist snapshot and theme flag are written only by the worker
//! through the [`storage::Store`] trait; mutations always serialize the full
//! value (last write wins, no deltas).
//!
//! ## One-shot fetch
//!
//! The inventory is fetched exactly once per plugin load. A failed fetch
//! logs and falls back to an empty dataset; there is no retry, timeout, or
//! partial-result handling.
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: any ANSI-capable terminal emulator

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, ViewMode};
pub use domain::{CarRecord, CarfinderError, Result, Wishlist, WishlistEntry};
pub use ui::{Theme, ThemeFlag};

use std::collections::BTreeMap;

/// Default inventory endpoint, matching the development data server.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/cars";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/carfinder.wasm" {
///     endpoint "http://localhost:5000/cars"
///     page_size "10"
///     theme "light"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
///     detail_id "42"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the inventory endpoint returning a JSON array of cars.
    pub endpoint: String,

    /// Cars per page in the inventory view. Default: 10
    pub page_size: usize,

    /// Built-in theme name, `dark` or `light`. Ignored if `theme_file` is
    /// set. The persisted flag, once present, wins over this value.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over
    /// `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// When set, the plugin renders only the placeholder detail screen for
    /// this identifier instead of the list UI.
    pub detail_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: app::state::DEFAULT_PAGE_SIZE,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            detail_id: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `endpoint`: string, default [`DEFAULT_ENDPOINT`]
    /// - `page_size`: string → `usize`, falls back to 10 on parse error or 0
    /// - `theme` / `theme_file` / `trace_level` / `detail_id`: optional
    ///   strings
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use carfinder::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("endpoint".to_string(), "http://cars.local/cars".to_string());
    /// map.insert("page_size".to_string(), "5".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint, "http://cars.local/cars");
    /// assert_eq!(config.page_size, 5);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let endpoint = config
            .get("endpoint")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let page_size = config
            .get("page_size")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(app::state::DEFAULT_PAGE_SIZE);

        Self {
            endpoint,
            page_size,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            detail_id: config.get("detail_id").cloned(),
        }
    }
}

/// Initializes the application state from configuration.
///
/// Resolves the theme (custom file, then built-in name, then the dark
/// default; the persisted flag arrives later via the worker), applies the
/// page size, and records the optional detail-route identifier. The car
/// list starts empty in loading state until the fetch resumes.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing carfinder plugin");

    let flag = config
        .theme_name
        .as_deref()
        .and_then(ThemeFlag::parse)
        .unwrap_or(ThemeFlag::Dark);

    let theme = config.theme_file.as_ref().map_or_else(
        || Theme::from_flag(flag),
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using built-in");
                Theme::from_flag(flag)
            })
        },
    );

    let mut state = AppState::new(vec![], theme);
    state.theme_flag = flag;
    state.page_size = config.page_size;
    state.route_car_id = config.detail_id.clone();
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply_for_missing_keys() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.page_size, 10);
        assert!(config.theme_name.is_none());
        assert!(config.detail_id.is_none());
    }

    #[test]
    fn config_rejects_zero_page_size() {
        let mut map = BTreeMap::new();
        map.insert("page_size".to_string(), "0".to_string());
        assert_eq!(Config::from_zellij(&map).page_size, 10);

        map.insert("page_size".to_string(), "not-a-number".to_string());
        assert_eq!(Config::from_zellij(&map).page_size, 10);
    }

    #[test]
    fn initialize_applies_theme_and_route() {
        let mut map = BTreeMap::new();
        map.insert("theme".to_string(), "light".to_string());
        map.insert("detail_id".to_string(), "42".to_string());
        map.insert("page_size".to_string(), "5".to_string());

        let state = initialize(&Config::from_zellij(&map));
        assert_eq!(state.theme.name, "light");
        assert_eq!(state.theme_flag, ThemeFlag::Light);
        assert_eq!(state.page_size, 5);
        assert_eq!(state.route_car_id.as_deref(), Some("42"));
        assert!(state.loading);
    }
}
