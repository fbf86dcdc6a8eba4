//! OpenTelemetry span exporter writing JSON lines.
//!
//! Each finished span becomes one flat JSON object on its own line:
//!
//! ```json
//! {"service":"long-press","traceId":"…","spanId":"…","parentSpanId":"…",
//!  "name":"handle_event","startUnixNano":"…","endUnixNano":"…",
//!  "attributes":{"event_type":"Click"},"status":"unset"}
//! ```

use super::rotating::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .to_string()
}

/// Exports finished spans to a rotating JSON-lines file.
#[derive(Debug)]
pub struct JsonLinesExporter {
    sink: RotatingFile,
    service: String,
    is_shutdown: AtomicBool,
}

impl JsonLinesExporter {
    #[must_use]
    pub fn new(sink: RotatingFile, resource: &Resource) -> Self {
        let service = resource
            .get(opentelemetry::Key::new("service.name"))
            .map_or_else(|| "unknown".to_string(), |v| v.as_str().into_owned());

        Self {
            sink,
            service,
            is_shutdown: AtomicBool::new(false),
        }
    }

    /// Renders one span as a JSON object.
    #[must_use]
    pub fn span_json(&self, span: &SpanData) -> Value {
        let attributes: Map<String, Value> = span
            .attributes
            .iter()
            .map(|kv| (kv.key.to_string(), Value::String(kv.value.as_str().into_owned())))
            .collect();

        let parent = if span.parent_span_id == SpanId::INVALID {
            Value::Null
        } else {
            Value::String(format!("{:016x}", span.parent_span_id))
        };

        let status = match &span.status {
            Status::Unset => Value::from("unset"),
            Status::Ok => Value::from("ok"),
            Status::Error { description } => json!({ "error": description.to_string() }),
        };

        json!({
            "service": self.service,
            "traceId": format!("{:032x}", span.span_context.trace_id()),
            "spanId": format!("{:016x}", span.span_context.span_id()),
            "parentSpanId": parent,
            "name": span.name,
            "startUnixNano": unix_nanos(span.start_time),
            "endUnixNano": unix_nanos(span.end_time),
            "attributes": attributes,
            "status": status,
        })
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let result = batch
            .iter()
            .try_for_each(|span| self.sink.write_line(&self.span_json(span).to_string()))
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

/// Builds a tracer provider exporting every span immediately to `path`.
#[must_use]
pub fn tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = JsonLinesExporter::new(RotatingFile::new(path), &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
