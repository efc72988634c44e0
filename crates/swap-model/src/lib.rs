//! Core data model for wallet swap histories.
//!
//! The types here mirror the JSON contract of the trade-history service
//! ([`Swap`], [`Token`], [`SwapHistory`]) plus the derived report shapes
//! ([`SwapRow`], [`REPORT_COLUMNS`]) every downstream stage consumes.
//! Validation lives at the edges: [`WalletAddress`] is the only value that
//! must be checked before a pipeline run starts.

pub mod address;
pub mod error;
pub mod row;
pub mod swap;

pub use address::{ADDRESS_LEN, WalletAddress};
pub use error::{ModelError, Result};
pub use row::{REPORT_COLUMNS, SwapRow};
pub use swap::{Swap, SwapHistory, Token};
