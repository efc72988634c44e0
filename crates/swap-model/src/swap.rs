//! Wire types of the trade-history service.

use serde::{Deserialize, Serialize};

/// One token leg of a swap as the history service reports it.
///
/// `amount` is a base-unit integer carried as a decimal string; scaling it to
/// a display value is a downstream concern and never happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Contract address of the token.
    pub address: String,
    /// Human-readable token name.
    pub name: String,
    /// Ticker symbol shown in report rows.
    pub symbol: String,
    /// Base-unit amount as a decimal string.
    pub amount: String,
}

/// One historical trade: a sold leg (`token_in`) and a bought leg
/// (`token_out`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swap {
    /// Wallet that received the bought tokens.
    pub receiver: String,
    /// On-chain transaction hash.
    pub transaction_hash: String,
    /// Execution time as epoch seconds in a decimal string.
    pub executed_at: String,
    /// Chain the swap executed on.
    pub chain_id: i64,
    /// The leg the wallet gave away.
    pub token_in: Token,
    /// The leg the wallet received.
    pub token_out: Token,
}

/// Response envelope of the swap-history endpoint.
///
/// The sequence keeps whatever order the service returned, may be empty, and
/// is never re-sorted or deduplicated on this side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapHistory {
    pub swaps: Vec<Swap>,
}

impl SwapHistory {
    /// Number of swaps in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    /// Whether the wallet has no recorded swaps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SwapHistory;

    const HISTORY_JSON: &str = r#"{
        "swaps": [
            {
                "receiver": "0x1111111111111111111111111111111111111111",
                "transactionHash": "0xdeadbeef",
                "executedAt": "1700000000",
                "chainId": 137,
                "tokenIn": {
                    "address": "0x2222222222222222222222222222222222222222",
                    "name": "Ether",
                    "symbol": "ETH",
                    "amount": "2000000000000000000"
                },
                "tokenOut": {
                    "address": "0x3333333333333333333333333333333333333333",
                    "name": "USD Coin",
                    "symbol": "USDC",
                    "amount": "4000000000000000000"
                }
            }
        ]
    }"#;

    #[test]
    fn deserializes_wire_history() {
        let history: SwapHistory = serde_json::from_str(HISTORY_JSON).unwrap();
        assert_eq!(history.len(), 1);

        let swap = &history.swaps[0];
        assert_eq!(swap.transaction_hash, "0xdeadbeef");
        assert_eq!(swap.executed_at, "1700000000");
        assert_eq!(swap.chain_id, 137);
        assert_eq!(swap.token_in.symbol, "ETH");
        assert_eq!(swap.token_in.amount, "2000000000000000000");
        assert_eq!(swap.token_out.symbol, "USDC");
    }

    #[test]
    fn deserializes_empty_history() {
        let history: SwapHistory = serde_json::from_str(r#"{"swaps": []}"#).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let history: SwapHistory = serde_json::from_str(HISTORY_JSON).unwrap();
        let json = serde_json::to_string(&history).unwrap();

        assert!(json.contains("\"transactionHash\""));
        assert!(json.contains("\"executedAt\""));
        assert!(json.contains("\"tokenIn\""));
        assert!(json.contains("\"chainId\""));
        assert!(!json.contains("\"transaction_hash\""));
    }

    #[test]
    fn rejects_missing_swaps_field() {
        assert!(serde_json::from_str::<SwapHistory>("{}").is_err());
    }
}
