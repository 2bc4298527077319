//! Error types for the Carfinder plugin.
//!
//! This module defines the centralized error type [`CarfinderError`] and a
//! [`Result`] alias used throughout the plugin. Variants are implemented with
//! `thiserror` for automatic `Error` trait implementations.

use thiserror::Error;

/// The main error type for Carfinder operations.
///
/// Consolidates the error conditions that can occur during plugin execution:
/// storage I/O, inventory fetch/decode problems, theme loading, worker
/// communication, and configuration parsing.
#[derive(Debug, Error)]
pub enum CarfinderError {
    /// Storage operation failed.
    ///
    /// Reading or writing a persisted snapshot (wishlist, theme flag) failed
    /// in a way that is not a plain I/O error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Inventory fetch or decode failed.
    ///
    /// Covers non-success HTTP statuses and response bodies that do not
    /// decode as a JSON array of car records.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Carfinder operations.
pub type Result<T> = std::result::Result<T, CarfinderError>;
