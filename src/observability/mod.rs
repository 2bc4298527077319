//! OpenTelemetry-based observability with file-based trace export.
//!
//! Traces are written as OTLP JSON to a rotating file in the plugin data
//! directory, since the WASM sandbox has no network collector to ship them
//! to. One line per exported batch; files rotate at a size threshold with a
//! small backup retention.
//!
//! # Pipeline
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK → TraceFileExporter → JSON file
//! ```
//!
//! The trace level comes from the `trace_level` configuration key, default
//! `"info"`. Initialization is idempotent; only the first call per thread
//! takes effect.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`tracer`]: tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
