//! Background worker thread for storage operations.
//!
//! All persistence I/O runs on a Zellij worker thread so the main plugin
//! thread never blocks on disk. Communication uses Zellij's IPC with JSON
//! payloads, and messages carry trace context for cross-thread spans.
//!
//! # Architecture
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: worker implementation and message processing

pub mod handler;
pub mod messages;

pub use handler::CarfinderWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
