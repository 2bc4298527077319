//! OTLP JSON span formatter.
//!
//! Converts SDK span data into OTLP (OpenTelemetry Protocol) JSON documents
//! so the trace file stays readable by standard OTLP tooling.

use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::Value as JsonValue;

/// Instrumentation scope name stamped on every batch.
const SCOPE_NAME: &str = "carfinder";

/// Formats batches of spans into complete OTLP JSON documents.
pub struct SpanFormatter {
    /// Resource metadata (service name, etc.) included per batch.
    resource: Resource,
}

impl SpanFormatter {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Formats a batch as one OTLP document:
    ///
    /// ```json
    /// {
    ///   "resourceSpans": [{
    ///     "resource": { "attributes": [...] },
    ///     "scopeSpans": [{ "scope": { "name": "carfinder" }, "spans": [...] }]
    ///   }]
    /// }
    /// ```
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(k, v)| {
                serde_json::json!({
                    "key": k.to_string(),
                    "value": Self::format_attribute_value(v)
                })
            })
            .collect();

        let spans_json: Vec<JsonValue> = batch.iter().map(Self::format_span).collect();

        serde_json::json!({
            "resourceSpans": [{
                "resource": {
                    "attributes": resource_attrs
                },
                "scopeSpans": [{
                    "scope": {
                        "name": SCOPE_NAME,
                    },
                    "spans": spans_json
                }]
            }]
        })
    }

    /// Formats one span: hex IDs, nanosecond timestamps, attributes, events,
    /// links, and status.
    fn format_span(span: &SpanData) -> JsonValue {
        let (status_code, status_message) = Self::format_status(&span.status);

        serde_json::json!({
            "traceId": format!("{:032x}", span.span_context.trace_id()),
            "spanId": format!("{:016x}", span.span_context.span_id()),
            "parentSpanId": if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
                String::new()
            } else {
                format!("{:016x}", span.parent_span_id)
            },
            "name": span.name,
            "kind": Self::span_kind_to_int(&span.span_kind),
            "startTimeUnixNano": format!("{}", Self::unix_nanos(span.start_time)),
            "endTimeUnixNano": format!("{}", Self::unix_nanos(span.end_time)),
            "attributes": Self::format_attributes(&span.attributes),
            "events": Self::format_events(&span.events),
            "links": Self::format_links(&span.links),
            "status": {
                "code": status_code,
                "message": status_message,
            },
        })
    }

    /// Nanoseconds since the Unix epoch, 0 for pre-epoch timestamps.
    fn unix_nanos(time: std::time::SystemTime) -> u128 {
        time.duration_since(std::time::SystemTime::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_nanos()
    }

    /// OTLP integer code for a span kind (Internal=1 ... Consumer=5).
    const fn span_kind_to_int(kind: &opentelemetry::trace::SpanKind) -> u8 {
        match kind {
            opentelemetry::trace::SpanKind::Internal => 1,
            opentelemetry::trace::SpanKind::Server => 2,
            opentelemetry::trace::SpanKind::Client => 3,
            opentelemetry::trace::SpanKind::Producer => 4,
            opentelemetry::trace::SpanKind::Consumer => 5,
        }
    }

    fn format_attributes(attributes: &[opentelemetry::KeyValue]) -> Vec<JsonValue> {
        attributes
            .iter()
            .map(|kv| {
                serde_json::json!({
                    "key": kv.key.to_string(),
                    "value": Self::format_attribute_value(&kv.value)
                })
            })
            .collect()
    }

    /// OTLP typed value for an attribute. Integers travel as strings per the
    /// OTLP JSON encoding; arrays fall back to their debug form.
    fn format_attribute_value(value: &opentelemetry::Value) -> JsonValue {
        use opentelemetry::Value;

        match value {
            Value::Bool(b) => serde_json::json!({ "boolValue": b }),
            Value::I64(i) => serde_json::json!({ "intValue": i.to_string() }),
            Value::F64(f) => serde_json::json!({ "doubleValue": f }),
            Value::String(s) => serde_json::json!({ "stringValue": s.to_string() }),
            Value::Array(_) => serde_json::json!({ "stringValue": format!("{:?}", value) }),
        }
    }

    fn format_events(events: &[opentelemetry::trace::Event]) -> Vec<JsonValue> {
        events
            .iter()
            .map(|event| {
                serde_json::json!({
                    "timeUnixNano": format!("{}", Self::unix_nanos(event.timestamp)),
                    "name": event.name,
                    "attributes": Self::format_attributes(&event.attributes),
                })
            })
            .collect()
    }

    fn format_links(links: &[opentelemetry::trace::Link]) -> Vec<JsonValue> {
        links
            .iter()
            .map(|link| {
                serde_json::json!({
                    "traceId": format!("{:032x}", link.span_context.trace_id()),
                    "spanId": format!("{:016x}", link.span_context.span_id()),
                    "attributes": Self::format_attributes(&link.attributes),
                })
            })
            .collect()
    }

    /// OTLP status tuple: Unset `(0, "")`, Ok `(1, "")`, Error `(2, msg)`.
    fn format_status(status: &opentelemetry::trace::Status) -> (u8, String) {
        match status {
            opentelemetry::trace::Status::Unset => (0, String::new()),
            opentelemetry::trace::Status::Ok => (1, String::new()),
            opentelemetry::trace::Status::Error { description } => (2, description.to_string()),
        }
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").finish()
    }
}
