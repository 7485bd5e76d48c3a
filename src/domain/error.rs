//! Error types for the Zevility plugin.
//!
//! This module defines the centralized error type [`ZevilityError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for Zevility plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution, from storage and dataset I/O to theme and configuration issues.
/// I/O errors convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use zevility::domain::ZevilityError;
///
/// fn validate_config() -> Result<(), ZevilityError> {
///     Err(ZevilityError::Config("missing data_path".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ZevilityError {
    /// Preference or build storage operation failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The evility dataset file could not be read or parsed.
    ///
    /// The string describes what was wrong with the file or its contents.
    #[error("Dataset error: {0}")]
    Data(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Zevility operations.
///
/// Type alias for `std::result::Result<T, ZevilityError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZevilityError>;
