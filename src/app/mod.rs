//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain/storage/worker
//! layers, implementing the event-driven flow that powers the interactive
//! UI.
//!
//! # Architecture
//!
//! Unidirectional data flow:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! After each accepted mutation the handler re-runs the pure derived-view
//! engine ([`view::compute_view`]) and the shim re-renders.
//!
//! # Modules
//!
//! - [`actions`]: side-effect commands emitted by the event handler
//! - [`handler`]: event processing and state transitions
//! - [`modes`]: input and view mode state machine types
//! - [`state`]: central state container and view model computation
//! - [`view`]: pure derived-view computation (filter, sort, page, facets)

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus, ViewMode};
pub use state::AppState;
pub use view::{compute_view, DerivedView, FilterState, SortMode};
