// src/error.rs
//! Error types for the export pipeline.
//!
//! Only fatal conditions live in [`Error`]. Failures while *continuing* a
//! search are swallowed by the pagination driver and never reach the caller.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal pipeline errors. `Display` is meant to be shown to an end user as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unusable access credential, or the HTTP client could not be built
    #[error("configuration error: {0}")]
    Config(String),

    /// CPF/CNPJ empty or not numeric after stripping the mask
    #[error("invalid CPF/CNPJ: {0}")]
    InvalidIdentifier(String),

    /// The first search call failed; nothing was collected
    #[error("initial query failed: {0}")]
    InitialQuery(#[source] ProviderError),

    /// Writing the export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a [`crate::provider::RecordProvider`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider refused the credential (HTTP 401/403)
    #[error("access token rejected by provider (HTTP {status})")]
    Unauthorized { status: u16 },

    /// Any other non-success status
    #[error("provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Free-form failure, used by providers that are not HTTP-backed
    #[error("{0}")]
    Other(String),
}
