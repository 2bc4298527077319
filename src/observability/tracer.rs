//! Tracer provider with file-based span export.
//!
//! Implements a custom `SpanExporter` that appends OTLP JSON batches to a
//! rotating file instead of shipping them over the network, which the plugin
//! sandbox cannot do.

use super::file_writer::RotatingWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Span exporter writing OTLP JSON lines to a rotating file.
struct TraceFileExporter {
    writer: RotatingWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl TraceFileExporter {
    const fn new(file_path: PathBuf, resource: Resource) -> Self {
        Self {
            writer: RotatingWriter::new(file_path),
            formatter: SpanFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for TraceFileExporter {
    /// Formats the batch as one OTLP JSON document and appends it as a
    /// single line.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let json = self.formatter.format_batch(&batch).to_string();

        match self.writer.write_line(&json) {
            Ok(()) => Box::pin(std::future::ready(Ok(()))),
            Err(e) => Box::pin(std::future::ready(Err(TraceError::from(e.to_string())))),
        }
    }

    /// Blocks further exports; the file itself closes on drop.
    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// Resource is fixed at construction time.
    fn set_resource(&mut self, res: &Resource) {
        let _ = res;
    }
}

impl std::fmt::Debug for TraceFileExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceFileExporter")
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Builds a tracer provider exporting to the given file.
///
/// Uses the simple (immediate, non-batched) export strategy: span volume is
/// low and the WASM runtime has no background task to flush batches from.
pub fn build_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = TraceFileExporter::new(file_path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
