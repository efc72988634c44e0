//! Write-then-read property of the CSV table layer.

use proptest::prelude::*;
use tempfile::TempDir;

use swap_export::{read_rows, write_rows};
use swap_model::REPORT_COLUMNS;

/// Printable ASCII including delimiters, quotes and spaces.
fn field() -> impl Strategy<Value = String> {
    "[ -~]{0,12}"
}

proptest! {
    #[test]
    fn write_then_read_preserves_every_field(
        rows in prop::collection::vec(prop::array::uniform5(field()), 0..8)
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roundtrip.csv");

        write_rows(&path, &REPORT_COLUMNS, &rows).unwrap();
        let reloaded = read_rows(&path).unwrap();

        prop_assert_eq!(reloaded.len(), rows.len() + 1);
        prop_assert_eq!(&reloaded[0], &REPORT_COLUMNS);
        for (read, written) in reloaded[1..].iter().zip(&rows) {
            prop_assert_eq!(read.as_slice(), written.as_slice());
        }
    }
}
