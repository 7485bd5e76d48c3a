//! Storage layer for persisted preferences and builds.
//!
//! This module provides the storage abstraction for the rows-per-page
//! preference and the per-target character builds. It uses JSON file storage
//! with atomic writes.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::Storage;
pub use json::JsonStorage;
pub use models::{BuildRecord, Preferences};
