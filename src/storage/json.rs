//! JSON file-based storage backend.
//!
//! Persists the wishlist snapshot and the theme flag as two independent
//! JSON files in the plugin data directory, mirroring the original
//! independently keyed layout. Writes are atomic (write-to-temp + rename) so
//! a crash mid-write never leaves a half-written file behind.
//!
//! # Malformed data
//!
//! A snapshot that exists but does not parse is treated as absent: the load
//! logs a warning and returns the empty value. The wishlist is a convenience
//! the user can rebuild; refusing to start over a corrupt snapshot would be
//! strictly worse. (Recorded as an explicit decision in DESIGN.md.)

use crate::domain::error::{CarfinderError, Result};
use crate::domain::WishlistEntry;
use crate::storage::backend::Store;
use crate::storage::models::{ThemeSnapshot, WishlistSnapshot};
use std::path::{Path, PathBuf};

/// File name of the wishlist snapshot within the data directory.
const WISHLIST_FILE: &str = "wishlist.json";

/// File name of the theme flag within the data directory.
const THEME_FILE: &str = "theme.json";

/// JSON file storage backend.
///
/// # Thread Safety
///
/// `Send` but not `Sync`; designed to be owned by the single worker thread,
/// matching the plugin architecture.
pub struct JsonStore {
    /// Directory holding the per-key JSON files.
    data_dir: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at the given data directory.
    ///
    /// The directory is created if missing; the files themselves are created
    /// lazily on first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?data_dir, "initializing JSON store");
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn wishlist_path(&self) -> PathBuf {
        self.data_dir.join(WISHLIST_FILE)
    }

    fn theme_path(&self) -> PathBuf {
        self.data_dir.join(THEME_FILE)
    }

    /// Writes `json` to `path` atomically via a sibling temp file.
    fn write_atomic(path: &Path, json: &str) -> Result<()> {
        let tmp_path = path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl Store for JsonStore {
    fn load_wishlist(&self) -> Result<Vec<WishlistEntry>> {
        let _span = tracing::debug_span!("json_load_wishlist").entered();

        let path = self.wishlist_path();
        if !path.exists() {
            tracing::debug!("no wishlist snapshot on disk");
            return Ok(vec![]);
        }

        let contents = std::fs::read_to_string(&path)?;
        match serde_json::from_str::<WishlistSnapshot>(&contents) {
            Ok(snapshot) => {
                tracing::debug!(
                    version = snapshot.version,
                    entry_count = snapshot.entries.len(),
                    "wishlist snapshot loaded"
                );
                Ok(snapshot.entries)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = ?path,
                    "malformed wishlist snapshot, falling back to empty list"
                );
                Ok(vec![])
            }
        }
    }

    fn save_wishlist(&mut self, entries: &[WishlistEntry]) -> Result<()> {
        let _span = tracing::debug_span!("json_save_wishlist", entry_count = entries.len()).entered();

        let snapshot = WishlistSnapshot::new(entries.to_vec());
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| CarfinderError::Storage(format!("failed to serialize wishlist: {e}")))?;

        Self::write_atomic(&self.wishlist_path(), &json)?;
        tracing::debug!("wishlist snapshot saved");
        Ok(())
    }

    fn load_theme(&self) -> Result<Option<String>> {
        let _span = tracing::debug_span!("json_load_theme").entered();

        let path = self.theme_path();
        if !path.exists() {
            tracing::debug!("no theme flag on disk");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        match serde_json::from_str::<ThemeSnapshot>(&contents) {
            Ok(snapshot) => {
                tracing::debug!(flag = %snapshot.flag, "theme flag loaded");
                Ok(Some(snapshot.flag))
            }
            Err(e) => {
                tracing::warn!(error = %e, "malformed theme flag, using default");
                Ok(None)
            }
        }
    }

    fn save_theme(&mut self, flag: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_save_theme", flag = %flag).entered();

        let json = serde_json::to_string_pretty(&ThemeSnapshot::new(flag))
            .map_err(|e| CarfinderError::Storage(format!("failed to serialize theme flag: {e}")))?;

        Self::write_atomic(&self.theme_path(), &json)?;
        tracing::debug!("theme flag saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CarRecord;

    fn entry(id: u64, name: &str) -> WishlistEntry {
        WishlistEntry {
            car: CarRecord {
                id,
                name: name.to_string(),
                brand: "Tata".to_string(),
                fuel: "petrol".to_string(),
                body: "SUV".to_string(),
                seats: 5,
                price: 900_000,
                image: String::new(),
                description: None,
            },
            saved_at: 1_700_000_000 + id as i64,
        }
    }

    #[test]
    fn wishlist_round_trip_preserves_ids_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path().to_path_buf()).unwrap();

        let entries = vec![entry(3, "Punch"), entry(1, "Alto"), entry(2, "Nexon")];
        store.save_wishlist(&entries).unwrap();

        let loaded = store.load_wishlist().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn missing_snapshot_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf()).unwrap();
        assert!(store.load_wishlist().unwrap().is_empty());
        assert!(store.load_theme().unwrap().is_none());
    }

    #[test]
    fn malformed_snapshot_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf()).unwrap();

        std::fs::write(dir.path().join(WISHLIST_FILE), "{not json").unwrap();
        assert!(store.load_wishlist().unwrap().is_empty());

        std::fs::write(dir.path().join(THEME_FILE), "[]").unwrap();
        assert!(store.load_theme().unwrap().is_none());
    }

    #[test]
    fn save_replaces_previous_snapshot_whole() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path().to_path_buf()).unwrap();

        store
            .save_wishlist(&[entry(1, "Alto"), entry(2, "Nexon")])
            .unwrap();
        store.save_wishlist(&[entry(2, "Nexon")]).unwrap();

        let loaded = store.load_wishlist().unwrap();
        let ids: Vec<u64> = loaded.iter().map(|e| e.car.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn theme_flag_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path().to_path_buf()).unwrap();

        store.save_theme("light").unwrap();
        assert_eq!(store.load_theme().unwrap().as_deref(), Some("light"));

        store.save_theme("dark").unwrap();
        assert_eq!(store.load_theme().unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn no_temp_file_left_behind_after_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path().to_path_buf()).unwrap();

        store.save_wishlist(&[entry(1, "Alto")]).unwrap();
        assert!(!dir.path().join("wishlist.tmp").exists());
        assert!(dir.path().join(WISHLIST_FILE).exists());
    }
}
