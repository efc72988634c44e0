//! Swap row mapping and CSV export.
//!
//! This crate owns the lossy half of the pipeline: scaling base-unit amounts
//! to display strings ([`normalize_amount`]), turning wire swaps into report
//! rows ([`swap_row`]), and moving rows through CSV files ([`write_rows`],
//! [`read_rows`]). The CSV layer is content-agnostic: a write followed by a
//! read returns the fields byte for byte.

pub mod amount;
pub mod error;
pub mod options;
pub mod row;
pub mod table;

pub use amount::normalize_amount;
pub use error::{ExportError, Result};
pub use options::{ExportOptions, RowZone};
pub use row::swap_row;
pub use table::{read_rows, write_rows};
