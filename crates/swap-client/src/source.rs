//! The data source seam.

use swap_model::{SwapHistory, WalletAddress};

use crate::error::Result;

/// A provider of wallet swap histories.
///
/// The pipeline performs exactly one fetch per run, so implementations do not
/// need pagination or retry behavior.
pub trait SwapSource {
    /// Fetch the full swap history recorded for `address`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FetchError`] when the source cannot deliver a
    /// well-formed history.
    fn swap_history(&self, address: &WalletAddress) -> Result<SwapHistory>;
}
