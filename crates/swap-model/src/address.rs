//! Validated wallet address newtype.

use std::fmt;

use crate::error::{ModelError, Result};

/// Byte length of a prefixed-hex wallet address (`0x` plus 40 hex digits).
pub const ADDRESS_LEN: usize = 42;

/// A wallet address checked to the fixed 42-byte width.
///
/// Parsing is the pipeline's pre-flight gate: a value of the wrong length is
/// rejected before any network traffic happens. Content beyond the length is
/// not inspected; the history service is the authority on whether an address
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Validate `value` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::AddressLength`] when `value` is not exactly
    /// [`ADDRESS_LEN`] bytes long.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.len() != ADDRESS_LEN {
            return Err(ModelError::AddressLength {
                actual: value.len(),
                expected: ADDRESS_LEN,
            });
        }
        Ok(Self(value))
    }

    /// The validated address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
