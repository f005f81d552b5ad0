//! Error types for the zelmap plugin.
//!
//! This module defines the centralized error type [`ZelmapError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! None of these errors reach the user directly. The only user-visible failure
//! is the missing API key alert, which is modelled as state
//! ([`Alert`](crate::domain::Alert)) rather than as an error.

use thiserror::Error;

/// The main error type for zelmap operations.
///
/// # Examples
///
/// ```
/// use zelmap::ZelmapError;
///
/// let err = ZelmapError::HttpStatus(503);
/// assert_eq!(err.to_string(), "Geocoding endpoint answered HTTP 503");
/// ```
#[derive(Debug, Error)]
pub enum ZelmapError {
    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The geocoding response body could not be decoded.
    ///
    /// Automatically converts from `serde_json::Error`.
    #[error("Failed to decode geocoding response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The geocoding endpoint answered with a non-2xx HTTP status.
    #[error("Geocoding endpoint answered HTTP {0}")]
    HttpStatus(u16),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for zelmap operations.
pub type Result<T> = std::result::Result<T, ZelmapError>;
