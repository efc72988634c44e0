//! Error types for swap history retrieval.

use thiserror::Error;

/// Errors raised while fetching a wallet's swap history.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The service could not be reached or the request failed in flight.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("history service returned status {status}")]
    Status {
        status: u16,
        /// Response body, kept for diagnostics.
        body: String,
    },

    /// The response body was not the expected JSON contract.
    #[error("malformed history response: {0}")]
    Format(#[source] reqwest::Error),
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
