//! Storage file containers for the persistence layer.
//!
//! These types define the on-disk shape of the two persisted values. Each
//! value lives in its own file under the plugin data directory, wrapped in a
//! versioned container for future migrations. Keeping them separate mirrors
//! the original key-value layout: the wishlist and the theme flag are
//! independently keyed and independently written.

use crate::domain::WishlistEntry;
use serde::{Deserialize, Serialize};

/// On-disk container for the wishlist snapshot (`wishlist.json`).
///
/// The entry array is always written whole; there are no partial updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistSnapshot {
    /// Storage format version for future migrations.
    pub version: u32,

    /// Retained cars in insertion order.
    #[serde(default)]
    pub entries: Vec<WishlistEntry>,
}

impl WishlistSnapshot {
    /// Wraps entries in the current container version.
    #[must_use]
    pub fn new(entries: Vec<WishlistEntry>) -> Self {
        Self {
            version: 1,
            entries,
        }
    }
}

impl Default for WishlistSnapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// On-disk container for the theme flag (`theme.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSnapshot {
    /// Storage format version for future migrations.
    pub version: u32,

    /// Persisted flag value, "dark" or "light".
    pub flag: String,
}

impl ThemeSnapshot {
    /// Wraps a flag value in the current container version.
    #[must_use]
    pub fn new(flag: impl Into<String>) -> Self {
        Self {
            version: 1,
            flag: flag.into(),
        }
    }
}
