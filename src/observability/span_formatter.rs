//! OTLP JSON span formatter.
//!
//! This module converts OpenTelemetry span data into OTLP (OpenTelemetry
//! Protocol) JSON format for file export. The output is compatible with OTLP
//! trace collectors and offline analysis tools.

use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::Value as JsonValue;

/// Instrumentation scope name recorded in exported batches.
const SCOPE_NAME: &str = "Zevility";

/// Formats span batches into OTLP JSON documents.
///
/// Holds the resource metadata (service name and friends) that every
/// exported batch carries.
pub struct SpanFormatter {
    resource: Resource,
}

impl SpanFormatter {
    /// Creates a formatter with the given resource metadata.
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Formats a batch of spans as a complete OTLP JSON document.
    ///
    /// The document contains `resourceSpans`, `scopeSpans`, and `spans`
    /// arrays as specified by the OTLP JSON encoding.
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

    /// Formats one span, including timing, attributes, events, and status.
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
            "startTimeUnixNano": Self::unix_nanos(span.start_time),
            "endTimeUnixNano": Self::unix_nanos(span.end_time),
            "attributes": Self::format_attributes(&span.attributes),
            "events": Self::format_events(&span.events),
            "status": {
                "code": status_code,
                "message": status_message,
            },
        })
    }

    /// Nanoseconds since the Unix epoch, as the decimal string OTLP expects.
    fn unix_nanos(time: std::time::SystemTime) -> String {
        time.duration_since(std::time::SystemTime::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_nanos()
            .to_string()
    }

    /// OTLP numeric encoding of a span kind.
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

    /// Maps an attribute value to its typed OTLP JSON representation.
    fn format_attribute_value(value: &opentelemetry::Value) -> JsonValue {
        use opentelemetry::Value;

        match value {
            Value::Bool(b) => serde_json::json!({ "boolValue": b }),
            Value::I64(i) => serde_json::json!({ "intValue": i.to_string() }),
            Value::F64(f) => serde_json::json!({ "doubleValue": f }),
            Value::String(s) => serde_json::json!({ "stringValue": s.to_string() }),
            Value::Array(_) => serde_json::json!({ "stringValue": format!("{value:?}") }),
        }
    }

    fn format_events(events: &[opentelemetry::trace::Event]) -> Vec<JsonValue> {
        events
            .iter()
            .map(|event| {
                serde_json::json!({
                    "timeUnixNano": Self::unix_nanos(event.timestamp),
                    "name": event.name,
                    "attributes": Self::format_attributes(&event.attributes),
                })
            })
            .collect()
    }

    /// OTLP status code and message for a span status.
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
        f.debug_struct("SpanFormatter").finish_non_exhaustive()
    }
}
