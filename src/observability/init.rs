//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with OpenTelemetry
//! integration, setting up the complete observability pipeline from
//! `tracing` macros to file export.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Sets up a pipeline that filters spans by the configured trace level,
/// exports them through OpenTelemetry, serializes to OTLP JSON, and writes
/// to a rotating file in the plugin data directory
/// (`zevility-otlp.json`).
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently returns if directory creation fails (observability is optional)
/// - Idempotent: safe to call multiple times, only the first call takes effect
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "Zevility",
    )]);

    let trace_file = data_dir.join("zevility-otlp.json");
    let provider = tracer::create_tracer_provider(trace_file, resource);

    let tracer = provider.tracer("Zevility");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
