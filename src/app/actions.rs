//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event;
//! the plugin shim executes them in sequence. Actions are the boundary
//! between pure state transitions and effectful host calls (hiding the pane,
//! posting IPC messages to the storage worker).

use crate::worker::WorkerMessage;

/// Commands produced by the event handler for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Posts a message to the background storage worker.
    ///
    /// Used for the startup reads (wishlist, theme flag) and for the full
    /// snapshot write that follows every accepted wishlist or theme
    /// mutation.
    PostToWorker(WorkerMessage),
}
