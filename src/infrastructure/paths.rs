//! Path utilities for the Zellij sandbox environment.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`,
//! pointing at the cwd of the last focused terminal (or where Zellij was
//! started). Persisted files live in a dedicated directory beneath the
//! standard Zellij data location.

use std::path::PathBuf;

/// Returns the data directory for Carfinder storage.
///
/// Resolves to `/host/.local/share/zellij/carfinder` in the sandbox, which
/// typically maps to `~/.local/share/zellij/carfinder` when Zellij is started
/// from the user's home directory. The wishlist snapshot, theme flag, and
/// trace file all live here.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("carfinder")
}
