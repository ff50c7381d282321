//! Error types for the GitHub directory client.

use thiserror::Error;

/// Errors that can occur setting up the GitHub directory client.
///
/// Lookup failures never surface here; they fold into
/// [`intake_core::Lookup`] so the validation pass can keep collecting.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for client setup.
pub type Result<T> = std::result::Result<T, ClientError>;
