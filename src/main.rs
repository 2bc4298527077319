//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Carfinder library and the Zellij
//! plugin system: implements the `ZellijPlugin` and `ZellijWorker` traits,
//! translates host events into library events, and executes the actions the
//! event handler returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: register for `Key`, `CustomMessage`,
//!    `WebRequestResult`, and `PermissionRequestResult` events
//! 3. **Permission Grant**: post the startup reads (wishlist, theme flag)
//!    to the worker and issue the single inventory fetch
//! 4. **Update**: handle events, delegate to the library layer
//! 5. **Render**: call the library render function
//!
//! # Event Mapping
//!
//! - `Key(Down/j)` → `Event::KeyDown` (or `Char('j')` while typing)
//! - `Key(Enter)` → `Event::ShowDetail` (closes the overlay when open)
//! - `Key(Esc)` → `Event::ExitSearch` / `Event::Escape` / close overlay
//! - `WebRequestResult` → `Event::InventoryLoaded` / `Event::FetchFailed`
//! - `CustomMessage` → `Event::WorkerResponse`
//!
//! # Keybindings
//!
//! Global: `Ctrl+n`/`Ctrl+p` move the cursor in every mode.
//!
//! Normal mode: `j`/`k` move, `h`/`l` (or arrows) change page, `Enter`
//! details, `w` wishlist toggle, `/` search, `f`/`b` facet cycles, `s` sort
//! cycle, `v` wishlist view, `i` inventory view, `d` theme toggle, `q`
//! close.
//!
//! Search mode: type to filter, `Backspace` edits, `Tab` moves focus to the
//! results, `/` back to the input, `Esc` exits, `Enter` opens details.
//!
//! Detail overlay: `Esc`/`Enter`/`q` close, `w` toggles the wishlist.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, web_request};

use carfinder::worker::{CarfinderWorker, WorkerMessage, WorkerResponse};
use carfinder::{handle_event, Action, CarRecord, Config, Event, InputMode, SearchFocus};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(CarfinderWorker, carfinder_worker, CARFINDER_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: worker
/// IPC naming and the one-shot fetch bookkeeping.
struct State {
    /// Core application state from the library layer.
    app: carfinder::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Configured inventory endpoint.
    endpoint: String,

    /// Whether the one-shot inventory fetch has been issued.
    fetch_started: bool,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: carfinder::initialize(&default_config),
            worker_name: "carfinder".to_string(),
            endpoint: default_config.endpoint,
            fetch_started: false,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes application state and tracing,
    /// requests the web-access permission, and subscribes to events. The
    /// fetch itself waits for the permission grant.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        carfinder::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(endpoint = %config.endpoint, page_size = config.page_size, "parsed configuration");
        self.app = carfinder::initialize(&config);
        self.endpoint = config.endpoint;
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes the resulting actions. Returns `true`
    /// if the UI should re-render.
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
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, _context) => {
                Self::map_web_request_result(status, &body)
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

    /// Renders the plugin UI by delegating to the library rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        carfinder::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Issues the one-shot inventory fetch.
    ///
    /// Exactly one `WebRequestResult` event will resume the flow, on success
    /// or failure; there is no retry.
    fn start_inventory_fetch(&mut self) {
        if self.fetch_started {
            tracing::debug!("inventory fetch already issued, skipping");
            return;
        }
        self.fetch_started = true;

        tracing::debug!(endpoint = %self.endpoint, "fetching inventory");
        web_request(
            &self.endpoint,
            HttpVerb::Get,
            BTreeMap::new(),
            vec![],
            BTreeMap::new(),
        );
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        // The detail overlay swallows everything except close and wishlist
        // toggle.
        if self.app.detail.is_some() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseDetail),
                BareKey::Char('w') => Some(Event::ToggleWishlist),
                _ => None,
            };
        }

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        let typing = matches!(self.app.input_mode, InputMode::Search(SearchFocus::Typing));

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char('j') if !typing => Event::KeyDown,
            BareKey::Char('k') if !typing => Event::KeyUp,
            BareKey::Left => Event::PrevPage,
            BareKey::Right => Event::NextPage,
            BareKey::Char('h') if !typing => Event::PrevPage,
            BareKey::Char('l') if !typing => Event::NextPage,
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Enter => Event::ShowDetail,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Tab if matches!(self.app.input_mode, InputMode::Search(_)) => {
                Event::FocusResults
            }
            BareKey::Char('w') if !typing => Event::ToggleWishlist,
            BareKey::Char('f') if self.app.input_mode == InputMode::Normal => {
                Event::CycleFuelFilter
            }
            BareKey::Char('b') if self.app.input_mode == InputMode::Normal => {
                Event::CycleBodyFilter
            }
            BareKey::Char('s') if self.app.input_mode == InputMode::Normal => Event::CycleSort,
            BareKey::Char('v') if self.app.input_mode == InputMode::Normal => Event::ShowWishlist,
            BareKey::Char('i') if self.app.input_mode == InputMode::Normal => Event::ShowInventory,
            BareKey::Char('d') if self.app.input_mode == InputMode::Normal => Event::ToggleTheme,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Handles permission request results.
    ///
    /// On grant, posts the startup reads to the worker and issues the
    /// inventory fetch.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - initializing plugin");
                self.post_worker_message(&WorkerMessage::load_wishlist());
                self.post_worker_message(&WorkerMessage::load_theme());
                self.start_inventory_fetch();
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - inventory cannot be fetched");
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

    /// Maps the fetch result to an application event.
    ///
    /// A success status with a decodable JSON array yields the dataset;
    /// anything else is a fetch failure that the handler logs and recovers
    /// from with an empty list.
    fn map_web_request_result(status: u16, body: &[u8]) -> Event {
        tracing::debug!(status = status, body_len = body.len(), "web request result event");

        if !(200..300).contains(&status) {
            return Event::FetchFailed {
                error: format!("inventory endpoint returned status {status}"),
            };
        }

        match serde_json::from_slice::<Vec<CarRecord>>(body) {
            Ok(cars) => Event::InventoryLoaded { cars },
            Err(e) => Event::FetchFailed {
                error: format!("failed to decode inventory response: {e}"),
            },
        }
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
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
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                tracing::debug!(message = ?message, "posting message to worker");
                self.post_worker_message(message);
            }
        }
    }
}
