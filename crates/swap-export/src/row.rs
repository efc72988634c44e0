//! Swap-to-row mapping.

use chrono::{DateTime, Local};

use swap_model::{Swap, SwapRow};

use crate::amount::normalize_amount;
use crate::error::{ExportError, Result};
use crate::options::{ExportOptions, RowZone};

/// Display format of execution timestamps, minute precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Map one wire swap onto its report row.
///
/// The sold side comes from `token_in`, the bought side from `token_out`;
/// both amounts are normalized independently and the first failure wins.
///
/// # Errors
///
/// Returns [`ExportError::Parse`] when `executed_at` or either amount is not
/// numeric.
pub fn swap_row(swap: &Swap, options: &ExportOptions) -> Result<SwapRow> {
    Ok(SwapRow {
        executed_at: format_timestamp(&swap.executed_at, options.zone)?,
        sold_symbol: swap.token_in.symbol.clone(),
        sold_amount: normalize_amount(&swap.token_in.amount, options)?,
        bought_symbol: swap.token_out.symbol.clone(),
        bought_amount: normalize_amount(&swap.token_out.amount, options)?,
    })
}

/// Parse epoch seconds out of `raw` and format them in `zone`.
fn format_timestamp(raw: &str, zone: RowZone) -> Result<String> {
    let parse_error = || ExportError::Parse {
        field: "executedAt",
        value: raw.to_string(),
    };
    let seconds: i64 = raw.parse().map_err(|_| parse_error())?;
    let utc = DateTime::from_timestamp(seconds, 0).ok_or_else(parse_error)?;
    let formatted = match zone {
        RowZone::Utc => utc.format(TIMESTAMP_FORMAT).to_string(),
        RowZone::Local => utc
            .with_timezone(&Local)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
    };
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use swap_model::{Swap, Token};

    use super::swap_row;
    use crate::error::ExportError;
    use crate::options::{ExportOptions, RowZone};

    fn token(symbol: &str, amount: &str) -> Token {
        Token {
            address: format!("0x{}", "22".repeat(20)),
            name: symbol.to_string(),
            symbol: symbol.to_string(),
            amount: amount.to_string(),
        }
    }

    fn swap(executed_at: &str, sold: Token, bought: Token) -> Swap {
        Swap {
            receiver: format!("0x{}", "11".repeat(20)),
            transaction_hash: "0xdeadbeef".to_string(),
            executed_at: executed_at.to_string(),
            chain_id: 1,
            token_in: sold,
            token_out: bought,
        }
    }

    fn utc_options() -> ExportOptions {
        ExportOptions::default().with_zone(RowZone::Utc)
    }

    #[test]
    fn maps_swap_to_report_row() {
        let swap = swap(
            "1700000000",
            token("ETH", "2000000000000000000"),
            token("USDC", "4000000000000000000"),
        );

        let row = swap_row(&swap, &utc_options()).unwrap();
        assert_eq!(
            row.into_record(),
            [
                "2023-11-14 22:13".to_string(),
                "ETH".to_string(),
                "2.00".to_string(),
                "USDC".to_string(),
                "4.00".to_string(),
            ]
        );
    }

    #[test]
    fn epoch_zero_formats_in_utc() {
        let swap = swap("0", token("A", "0"), token("B", "0"));
        let row = swap_row(&swap, &utc_options()).unwrap();
        assert_eq!(row.executed_at, "1970-01-01 00:00");
    }

    #[test]
    fn rejects_non_numeric_timestamp() {
        let swap = swap("yesterday", token("A", "0"), token("B", "0"));
        let err = swap_row(&swap, &utc_options()).unwrap_err();
        match err {
            ExportError::Parse { field, value } => {
                assert_eq!(field, "executedAt");
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_numeric_sold_amount() {
        let swap = swap("1700000000", token("A", "1.2.3"), token("B", "0"));
        let err = swap_row(&swap, &utc_options()).unwrap_err();
        match err {
            ExportError::Parse { field, .. } => assert_eq!(field, "amount"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_fractional_timestamp() {
        let swap = swap("1700000000.5", token("A", "0"), token("B", "0"));
        assert!(swap_row(&swap, &utc_options()).is_err());
    }
}
