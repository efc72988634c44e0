//! Swap history retrieval.
//!
//! [`SwapSource`] is the seam between the pipeline and the trade-history
//! service; [`HistoryClient`] is the production implementation speaking the
//! service's JSON contract over blocking HTTP. Tests substitute their own
//! [`SwapSource`] and never touch the network.

pub mod error;
pub mod http;
pub mod source;

pub use error::{FetchError, Result};
pub use http::{DEFAULT_BASE_URL, HistoryClient};
pub use source::SwapSource;
