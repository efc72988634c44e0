//! Report row shape shared by the CSV and PDF outputs.

/// Column headers of the swap report, in emission order.
pub const REPORT_COLUMNS: [&str; 5] = [
    "Time",
    "Sold Token",
    "Sold Amount",
    "Bought Token",
    "Bought Amount",
];

/// A fully formatted report row: one CSV record and one PDF table row.
///
/// All fields are display strings; numeric and temporal interpretation is
/// finished by the time a row exists. Field order matches
/// [`REPORT_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRow {
    /// Execution time, already formatted for display.
    pub executed_at: String,
    /// Symbol of the sold token.
    pub sold_symbol: String,
    /// Normalized sold amount.
    pub sold_amount: String,
    /// Symbol of the bought token.
    pub bought_symbol: String,
    /// Normalized bought amount.
    pub bought_amount: String,
}

impl SwapRow {
    /// The row as an ordered record aligned with [`REPORT_COLUMNS`].
    #[must_use]
    pub fn into_record(self) -> [String; 5] {
        [
            self.executed_at,
            self.sold_symbol,
            self.sold_amount,
            self.bought_symbol,
            self.bought_amount,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{REPORT_COLUMNS, SwapRow};

    #[test]
    fn record_order_matches_columns() {
        let row = SwapRow {
            executed_at: "2023-11-14 22:13".to_string(),
            sold_symbol: "ETH".to_string(),
            sold_amount: "2.00".to_string(),
            bought_symbol: "USDC".to_string(),
            bought_amount: "4.00".to_string(),
        };

        let record = row.into_record();
        assert_eq!(record.len(), REPORT_COLUMNS.len());
        assert_eq!(
            record,
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
    fn columns_start_with_time() {
        assert_eq!(REPORT_COLUMNS[0], "Time");
        assert_eq!(REPORT_COLUMNS[4], "Bought Amount");
    }
}
