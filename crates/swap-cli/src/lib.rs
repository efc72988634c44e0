//! Command-line generator of wallet swap reports.
//!
//! The heart of the crate is [`pipeline::run`], which drives one report from
//! address validation through fetch, CSV export and PDF rendering. The
//! binary in `main.rs` is a thin shell: parse arguments, initialize logging,
//! call the pipeline, print the summary.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
pub mod summary;
