//! Storage backend abstraction.
//!
//! This module defines the [`Store`] trait, the single boundary through which
//! persisted state is read and written. Only the background worker holds a
//! store; no other module touches the files, which keeps the "key-value
//! access sprinkled across mutation paths" failure mode out of the codebase.
//!
//! # Design
//!
//! The trait is minimal and use-case shaped, not a generic ORM: one load and
//! one save per persisted key. Saves always take the full value; the
//! backends never merge.

use crate::domain::error::Result;
use crate::domain::WishlistEntry;

/// Abstraction over persistent storage backends.
///
/// # Implementations
///
/// - [`JsonStore`](crate::storage::JsonStore): one JSON file per key with
///   atomic writes (default)
pub trait Store: Send {
    /// Reads the persisted wishlist entries.
    ///
    /// Returns an empty list when the snapshot has never been written.
    /// A snapshot that exists but does not parse also yields an empty list
    /// (logged, not propagated); see the backend docs for the rationale.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot exists but cannot be read.
    fn load_wishlist(&self) -> Result<Vec<WishlistEntry>>;

    /// Replaces the persisted wishlist with the given entries.
    ///
    /// Always writes the full snapshot; last write wins.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    fn save_wishlist(&mut self, entries: &[WishlistEntry]) -> Result<()>;

    /// Reads the persisted theme flag.
    ///
    /// Returns `None` when the flag has never been written or does not
    /// parse.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    fn load_theme(&self) -> Result<Option<String>>;

    /// Persists the theme flag ("dark" or "light").
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    fn save_theme(&mut self, flag: &str) -> Result<()>;
}
