//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over persistence
//! backends for preferences and builds. The trait is minimal and use-case
//! driven: each method maps directly to one worker operation, not a generic
//! ORM surface.

use crate::domain::error::Result;
use crate::storage::models::{BuildRecord, Preferences};

/// Abstraction over persistent preference and build storage.
///
/// Implementations must be `Send`: the backend lives on the worker thread.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): single JSON file with
///   atomic writes (default)
pub trait Storage: Send {
    /// Returns the stored preferences.
    ///
    /// A freshly-created storage returns [`Preferences::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn preferences(&self) -> Result<Preferences>;

    /// Persists the rows-per-page preference.
    ///
    /// Any integer is accepted; -1 encodes the unbounded "All" option.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn set_rows_per_page(&mut self, rows_per_page: i32) -> Result<()>;

    /// Returns the build for the given target, `Ok(None)` if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn build(&self, target: &str) -> Result<Option<BuildRecord>>;

    /// Adds an evility to the target's build, creating the build on first use.
    ///
    /// Adding an id already in the build is a no-op. Returns the build size
    /// after the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn add_to_build(&mut self, target: &str, evility_id: u32) -> Result<usize>;
}
