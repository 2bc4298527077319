//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file within the data directory.
const TRACE_FILE: &str = "carfinder-otlp.json";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Builds the pipeline filter → OpenTelemetry layer → file exporter and
/// installs it as the global default. The level comes from
/// `config.trace_level`, default `"info"`. Safe to call more than once; only
/// the first call takes effect.
///
/// If the data directory cannot be created the function returns silently:
/// observability is optional and must never take the plugin down.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "carfinder",
    )]);

    let trace_file = data_dir.join(TRACE_FILE);
    let provider = tracer::build_provider(trace_file, resource);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer("carfinder"));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
