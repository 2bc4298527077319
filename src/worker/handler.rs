//! Worker thread implementation for storage operations.
//!
//! All file I/O happens on a Zellij worker thread so the main plugin thread
//! never blocks on disk. The worker owns the [`Store`] backend, processes
//! request messages from the plugin, and posts typed responses back. Spans
//! created here are linked to their parents on the main thread via the trace
//! context carried in each message.

use crate::domain::error::{CarfinderError, Result};
use crate::domain::WishlistEntry;
use crate::infrastructure::paths;
use crate::storage::backend::Store;
use crate::storage::JsonStore;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for handling storage operations.
///
/// Runs on a separate thread spawned by Zellij and processes messages sent
/// from the main plugin thread. The storage backend is initialized lazily on
/// first message receipt.
#[derive(Serialize, Deserialize, Default)]
pub struct CarfinderWorker {
    /// Storage backend, initialized lazily on first use.
    #[serde(skip)]
    store: Option<Box<dyn Store>>,
}

impl CarfinderWorker {
    /// Creates a worker with an initialized JSON store in the plugin data
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn new() -> Result<Self> {
        let store: Box<dyn Store> = Box::new(JsonStore::new(paths::data_dir())?);
        Ok(Self { store: Some(store) })
    }

    /// Returns the storage backend, failing if not initialized.
    fn store(&mut self) -> Result<&mut Box<dyn Store>> {
        self.store
            .as_mut()
            .ok_or_else(|| CarfinderError::Worker("store not initialized".to_string()))
    }

    /// Helper for handling store operation results with consistent logging.
    fn handle_store_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "store operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "store operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    fn handle_load_wishlist(&mut self) -> WorkerResponse {
        Self::handle_store_result(
            "load wishlist",
            self.store().and_then(|store| store.load_wishlist()),
            |entries| {
                tracing::debug!(entry_count = entries.len(), "wishlist loaded from disk");
                WorkerResponse::WishlistLoaded { entries }
            },
        )
    }

    fn handle_save_wishlist(&mut self, entries: Vec<WishlistEntry>) -> WorkerResponse {
        let count = entries.len();
        Self::handle_store_result(
            "save wishlist",
            self.store().and_then(|store| store.save_wishlist(&entries)),
            |()| {
                tracing::debug!(entry_count = count, "wishlist snapshot written to disk");
                WorkerResponse::WishlistSaved { count }
            },
        )
    }

    fn handle_load_theme(&mut self) -> WorkerResponse {
        Self::handle_store_result(
            "load theme",
            self.store().and_then(|store| store.load_theme()),
            |flag| {
                tracing::debug!(flag = ?flag, "theme flag loaded from disk");
                WorkerResponse::ThemeLoaded { flag }
            },
        )
    }

    fn handle_save_theme(&mut self, flag: String) -> WorkerResponse {
        Self::handle_store_result(
            "save theme",
            self.store().and_then(|store| store.save_theme(&flag)),
            |()| {
                tracing::debug!(flag = %flag, "theme flag written to disk");
                WorkerResponse::ThemeSaved { flag }
            },
        )
    }

    /// Attaches the parent trace context from a message to the current
    /// thread, linking worker spans to their originating main-thread spans.
    ///
    /// Returns a context guard that must be held for the duration of the
    /// operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = match message {
            WorkerMessage::LoadWishlist { trace_context, .. }
            | WorkerMessage::SaveWishlist { trace_context, .. }
            | WorkerMessage::LoadTheme { trace_context, .. }
            | WorkerMessage::SaveTheme { trace_context, .. } => trace_context,
        }
        .as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the appropriate response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadWishlist { .. } => self.handle_load_wishlist(),
            WorkerMessage::SaveWishlist { entries, .. } => self.handle_save_wishlist(entries),
            WorkerMessage::LoadTheme { .. } => self.handle_load_theme(),
            WorkerMessage::SaveTheme { flag, .. } => self.handle_save_theme(flag),
        }
    }
}

/// Initializes tracing for the worker thread so logs from both threads land
/// in the same trace file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for CarfinderWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Lazy-initializes the storage backend if needed
    /// 3. Deserializes the message payload
    /// 4. Processes the message via `handle_message`
    /// 5. Serializes and posts the response back to the main thread
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        if self.store.is_none() {
            match Self::new() {
                Ok(worker) => {
                    self.store = worker.store;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to initialize store");
                    let error_response = WorkerResponse::Error {
                        message: format!("failed to initialize store: {e}"),
                    };
                    if let Ok(payload) = serde_json::to_string(&error_response) {
                        post_message_to_plugin(PluginMessage {
                            name: message,
                            payload,
                            worker_name: None,
                        });
                    }
                    return;
                }
            }
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}
