//! Single-page PDF rendering of swap report tables.
//!
//! [`ReportBuilder`] lays out a landscape page top-down: title and run date
//! first, then a bordered table, then an optional logo. Layout faults (a
//! missing logo file, say) do not abort the calls that follow; they are
//! recorded on the builder and surface when [`ReportBuilder::finalize`]
//! runs, so a faulted report is never persisted.

pub mod builder;
pub mod error;
pub mod options;

pub use builder::ReportBuilder;
pub use error::{RenderError, Result};
pub use options::{CellAlign, ReportOptions};
