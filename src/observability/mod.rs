//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides distributed tracing infrastructure for the plugin,
//! using the OpenTelemetry OTLP format with file-based exporting. Traces are
//! written to JSON files for offline analysis and debugging.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry -> OpenTelemetry SDK -> FileSpanExporter -> JSON Files
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to the plugin data directory
//!   (`zevility-otlp.json`)
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON format
//! - **Cross-Thread Traces**: Worker messages carry trace context so spans
//!   from both threads stitch into one trace
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: Custom OpenTelemetry tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
