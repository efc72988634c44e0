//! Error types for the swap data model.

use thiserror::Error;

/// Errors raised while constructing validated model values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Wallet address is not the fixed prefixed-hex width.
    #[error("wrong address length {actual}, expected {expected} bytes")]
    AddressLength { actual: usize, expected: usize },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
