//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → rotating file
//! ```
//!
//! The trace level is taken from [`Settings::trace_level`](crate::Settings)
//! and spans are only exported when a trace file is configured. Files rotate
//! at 10 MiB and keep three backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and tracer provider
//! - [`rotating`]: Size-rotated line sink

pub mod exporter;
pub mod init;
pub mod rotating;

pub use init::{init_tracing, SERVICE_NAME};
