//! Storage layer for the persisted wishlist snapshot and theme flag.
//!
//! Provides the single persistence boundary of the plugin: the two
//! independently keyed values the original kept in browser storage live here
//! as JSON files, read once at startup and rewritten whole after every
//! relevant mutation.
//!
//! # Modules
//!
//! - `backend`: storage trait abstraction
//! - `json`: JSON file-based implementation with atomic writes
//! - `models`: on-disk container types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::Store;
pub use json::JsonStore;
pub use models::{ThemeSnapshot, WishlistSnapshot};
