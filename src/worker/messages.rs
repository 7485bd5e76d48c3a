//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! plugin thread and the background worker thread that handles dataset and
//! storage I/O. It also implements distributed tracing context propagation
//! across the thread boundary.

use crate::domain::Evility;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            tracing::debug!("span context is not valid");
            None
        }
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each message variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_evilities(LoadEvilities { path: String }),
    load_preferences(LoadPreferences {}),
    save_rows_per_page(SaveRowsPerPage { rows_per_page: i32 }),
    add_to_build(AddToBuild { target: String, evility_id: u32 }),
}

/// Messages sent from the main thread to the worker thread.
///
/// Each variant corresponds to an I/O operation performed off the rendering
/// thread. All variants carry an optional trace context for distributed
/// tracing support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load the evility dataset from the given file path.
    LoadEvilities {
        /// Dataset path; `~` is expanded to the sandbox host mount.
        path: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Load the persisted user preferences.
    LoadPreferences {
        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persist the rows-per-page preference.
    SaveRowsPerPage {
        /// Rows per page; -1 encodes the unbounded "All" option.
        rows_per_page: i32,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Add an evility to the build of the given target.
    AddToBuild {
        /// Build target the pick belongs to.
        target: String,

        /// Id of the picked evility.
        evility_id: u32,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

/// Responses sent from the worker thread back to the main thread.
///
/// Each variant corresponds to the completion of a worker operation, either
/// successfully with result data or with an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The dataset was loaded and parsed.
    EvilitiesLoaded {
        /// All records, in dataset (in-game listing) order.
        evilities: Vec<Evility>,
    },

    /// Stored preferences were loaded.
    PreferencesLoaded {
        /// The persisted rows-per-page value, `None` when unset or malformed.
        rows_per_page: Option<i32>,
    },

    /// The rows-per-page preference was written.
    RowsPerPageSaved {
        /// The value that was persisted.
        rows_per_page: i32,
    },

    /// An evility was added to a build (or was already present).
    BuildUpdated {
        /// Build target that was updated.
        target: String,

        /// Build size after the operation.
        count: usize,
    },

    /// A worker operation failed.
    Error {
        /// Human-readable failure description.
        message: String,
    },
}
