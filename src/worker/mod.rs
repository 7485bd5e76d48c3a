//! Background worker thread for asynchronous dataset and storage I/O.
//!
//! This module implements the worker thread that reads the evility dataset and
//! persists preferences and builds, keeping file I/O off the main plugin UI
//! thread. It uses Zellij's worker API for cross-thread communication and
//! includes distributed tracing support for observability.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::ZevilityWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
