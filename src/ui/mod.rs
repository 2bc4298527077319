//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled terminal output through
//! composable components, with dark/light theme support, search match
//! highlighting, pagination, and a detail overlay.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types representing renderable UI state
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: composable UI component renderers
//! - [`helpers`]: shared rendering utilities (highlighting, price format)
//! - [`theme`]: color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeFlag};
pub use viewmodel::{
    CarRow, DetailInfo, EmptyState, FacetBarInfo, FooterInfo, HeaderInfo, PaginationInfo,
    SearchBarInfo, UIViewModel,
};
