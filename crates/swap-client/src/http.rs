//! Blocking HTTP implementation of [`SwapSource`].

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use swap_model::{SwapHistory, WalletAddress};

use crate::error::{FetchError, Result};
use crate::source::SwapSource;

/// Default trade-history endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.octodefi.dev/trades/history";

/// Timeout applied to the whole request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the swap-history service.
///
/// One GET per report run; the wallet address travels as the `wallet` query
/// parameter.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    client: Client,
    base_url: String,
}

impl HistoryClient {
    /// Client against the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom endpoint. Also the hook tests use to point at
    /// a local server.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// URL of the history query for `address`.
    fn history_url(&self, address: &WalletAddress) -> String {
        format!("{}?wallet={}", self.base_url, address)
    }
}

impl SwapSource for HistoryClient {
    fn swap_history(&self, address: &WalletAddress) -> Result<SwapHistory> {
        let url = self.history_url(address);
        debug!(url = %url, "requesting swap history");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "history service refused request");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<SwapHistory>().map_err(|source| {
            if source.is_decode() {
                FetchError::Format(source)
            } else {
                FetchError::Transport(source)
            }
        })
    }
}
