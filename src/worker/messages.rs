//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! plugin thread and the background worker that owns the persisted files.
//! Requests carry an optional trace context so spans created in the worker
//! link back to their parents on the main thread.

use crate::domain::WishlistEntry;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Each builder attaches the current trace context to the message.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_wishlist(LoadWishlist {}),
    save_wishlist(SaveWishlist { entries: Vec<WishlistEntry> }),
    load_theme(LoadTheme {}),
    save_theme(SaveTheme { flag: String }),
}

/// Messages sent from the main thread to the worker thread.
///
/// Each variant is one persistence operation. The wishlist write is always a
/// full snapshot of the current list; there are no delta writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the persisted wishlist snapshot.
    LoadWishlist {
        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Replace the persisted wishlist with the given entries.
    SaveWishlist {
        /// Full wishlist in insertion order.
        entries: Vec<WishlistEntry>,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Read the persisted theme flag.
    LoadTheme {
        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persist the theme flag ("dark" or "light").
    SaveTheme {
        /// Flag value to persist.
        flag: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The persisted wishlist was read (empty if absent or malformed).
    WishlistLoaded {
        /// Entries in insertion order.
        entries: Vec<WishlistEntry>,
    },

    /// The wishlist snapshot was written.
    WishlistSaved {
        /// Number of entries in the written snapshot.
        count: usize,
    },

    /// The persisted theme flag was read (`None` if never written).
    ThemeLoaded {
        /// Flag value, "dark" or "light".
        flag: Option<String>,
    },

    /// The theme flag was written.
    ThemeSaved {
        /// The flag that was written.
        flag: String,
    },

    /// An error occurred during the worker operation.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
