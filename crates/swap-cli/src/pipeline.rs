//! Report pipeline with explicit stages.
//!
//! One run moves through fixed stages, each fatal on failure:
//!
//! 1. **Validate** the wallet address before anything leaves the machine
//! 2. **Resolve** the report window, defaulting an unset end bound to now
//! 3. **Fetch** the swap history, one call to the configured source
//! 4. **Export** the rows to the dated CSV
//! 5. **Reload** the CSV as uninterpreted rows
//! 6. **Render** and persist the PDF
//!
//! Rows are mapped before the CSV file is created, so a malformed swap fails
//! the run without leaving a partial file behind.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Local, Utc};
use thiserror::Error;
use tracing::{info, info_span};

use swap_client::{FetchError, SwapSource};
use swap_export::{ExportError, ExportOptions, RowZone, read_rows, swap_row, write_rows};
use swap_model::{ModelError, REPORT_COLUMNS, WalletAddress};
use swap_render::{RenderError, ReportBuilder, ReportOptions};

/// Date stamp prefixed to output file names.
const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything one run needs: wallet identity, report naming, the requested
/// window, and output layout.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Wallet address; validated as the first pipeline stage.
    pub address: String,
    /// Report name used in output file names.
    pub name: String,
    /// Window start, epoch seconds.
    pub from: i64,
    /// Window end, epoch seconds; 0 means now at invocation.
    pub to: i64,
    /// Directory both output files land in; created if absent.
    pub output_dir: PathBuf,
    /// Row formatting options.
    pub export: ExportOptions,
    /// Report layout options.
    pub report: ReportOptions,
}

impl RunConfig {
    /// Config with the default output location.
    pub fn new(address: impl Into<String>, name: impl Into<String>, from: i64, to: i64) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            from,
            to,
            output_dir: PathBuf::from("out/swaps"),
            export: ExportOptions::default(),
            report: ReportOptions::default(),
        }
    }

    /// Set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the row formatting options.
    #[must_use]
    pub fn with_export(mut self, export: ExportOptions) -> Self {
        self.export = export;
        self
    }

    /// Set the report layout options.
    #[must_use]
    pub fn with_report(mut self, report: ReportOptions) -> Self {
        self.report = report;
        self
    }
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunReport {
    /// Resolved report window.
    pub window: (DateTime<Utc>, DateTime<Utc>),
    /// Number of swaps in the report.
    pub swap_count: usize,
    /// Path of the written CSV.
    pub csv_path: PathBuf,
    /// Path of the written PDF.
    pub pdf_path: PathBuf,
}

/// Terminal pipeline failures, one variant per failure class.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Pre-flight address validation failed; nothing was fetched.
    #[error("invalid wallet address: {0}")]
    Validation(#[from] ModelError),

    /// The swap-history source could not deliver data.
    #[error("swap history fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Row mapping or CSV export and reload failed.
    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    /// The report canvas faulted or the PDF could not be persisted.
    #[error("report rendering failed: {0}")]
    Render(#[from] RenderError),

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Whether this failure was caught before any external work happened.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Run the full report pipeline against `source`.
///
/// # Errors
///
/// Returns the [`PipelineError`] of the first failing stage; later stages do
/// not run.
pub fn run(config: &RunConfig, source: &impl SwapSource) -> Result<RunReport, PipelineError> {
    let span = info_span!("report", name = %config.name);
    let _guard = span.enter();
    let run_start = Instant::now();

    let address = WalletAddress::parse(config.address.clone())?;
    let window = resolve_window(config.from, config.to);
    info!(
        address = %address,
        from = %window.0.format(FILE_DATE_FORMAT),
        to = %window.1.format(FILE_DATE_FORMAT),
        "creating swap history report"
    );

    let fetch_start = Instant::now();
    let history = info_span!("fetch").in_scope(|| source.swap_history(&address))?;
    info!(
        swap_count = history.len(),
        duration_ms = fetch_start.elapsed().as_millis(),
        "history fetched"
    );

    let (csv_path, pdf_path) = output_paths(config);
    fs::create_dir_all(&config.output_dir).map_err(|err| PipelineError::OutputDir {
        path: config.output_dir.clone(),
        source: err,
    })?;

    let export_start = Instant::now();
    let row_count = info_span!("export").in_scope(|| -> Result<usize, PipelineError> {
        let mut records = Vec::with_capacity(history.len());
        for swap in &history.swaps {
            records.push(swap_row(swap, &config.export)?.into_record());
        }
        write_rows(&csv_path, &REPORT_COLUMNS, &records)?;
        Ok(records.len())
    })?;
    info!(
        row_count,
        path = %csv_path.display(),
        duration_ms = export_start.elapsed().as_millis(),
        "csv written"
    );

    let table = info_span!("reload").in_scope(|| read_rows(&csv_path))?;

    let render_start = Instant::now();
    info_span!("render").in_scope(|| -> Result<(), PipelineError> {
        let Some((header, body)) = table.split_first() else {
            return Err(PipelineError::Export(ExportError::Csv {
                path: csv_path.clone(),
                message: "reloaded table is empty".to_string(),
            }));
        };
        let mut report = ReportBuilder::new(config.report.clone())?;
        report.header(header);
        report.table(body);
        report.logo();
        report.finalize(&pdf_path)?;
        Ok(())
    })?;
    info!(
        path = %pdf_path.display(),
        duration_ms = render_start.elapsed().as_millis(),
        "pdf written"
    );

    info!(
        duration_ms = run_start.elapsed().as_millis(),
        "report complete"
    );
    Ok(RunReport {
        window,
        swap_count: row_count,
        csv_path,
        pdf_path,
    })
}

/// Resolve the report window: a `to` of 0 means now at invocation time.
#[must_use]
pub fn resolve_window(from: i64, to: i64) -> (DateTime<Utc>, DateTime<Utc>) {
    let from = DateTime::from_timestamp(from, 0).unwrap_or(DateTime::UNIX_EPOCH);
    let to = if to == 0 {
        Utc::now()
    } else {
        DateTime::from_timestamp(to, 0).unwrap_or_else(Utc::now)
    };
    (from, to)
}

/// Dated output paths: `<dir>/<YYYY-MM-DD>_<name>.{csv,pdf}`.
///
/// Re-running the same report on the same day overwrites both files.
fn output_paths(config: &RunConfig) -> (PathBuf, PathBuf) {
    let stamp = match config.export.zone {
        RowZone::Utc => Utc::now().format(FILE_DATE_FORMAT).to_string(),
        RowZone::Local => Local::now().format(FILE_DATE_FORMAT).to_string(),
    };
    let base = format!("{stamp}_{}", config.name);
    (
        config.output_dir.join(format!("{base}.csv")),
        config.output_dir.join(format!("{base}.pdf")),
    )
}
