//! Tracing initialization and subscriber setup.

use super::exporter;
use crate::Settings;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to every exported span.
pub const SERVICE_NAME: &str = "long-press";

/// Installs the global tracing subscriber.
///
/// The filter level comes from `settings.trace_level` (default `"info"`).
/// When `settings.trace_file` is set, spans are exported to that file as JSON
/// lines; otherwise only the filter is installed.
///
/// Never fails: an unusable trace directory disables export, and a second
/// call leaves the first subscriber in place.
///
/// # Example
///
/// ```rust
/// use long_press::observability::init_tracing;
/// use long_press::Settings;
///
/// init_tracing(&Settings::default());
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(settings: &Settings) {
    let level = settings.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::new(level);

    let otel_layer = settings.trace_file.as_ref().and_then(|path| {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).ok()?;
        }

        let resource = Resource::new(vec![opentelemetry::KeyValue::new(
            "service.name",
            SERVICE_NAME,
        )]);
        let provider = exporter::tracer_provider(path.clone(), resource);
        Some(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
