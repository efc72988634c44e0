//! Subcommand implementations.

use comfy_table::Table;

use swap_client::HistoryClient;
use swap_export::{ExportOptions, RowZone};
use swap_model::REPORT_COLUMNS;
use swap_render::ReportOptions;

use crate::cli::HistoryArgs;
use crate::pipeline::{PipelineError, RunConfig, RunReport, run};
use crate::summary::apply_table_style;

/// Run the `history` subcommand: build the pipeline config from CLI
/// arguments and drive one report.
///
/// # Errors
///
/// Returns the [`PipelineError`] of the first failing stage.
pub fn run_history(args: &HistoryArgs) -> Result<RunReport, PipelineError> {
    let mut export = ExportOptions::default();
    if args.utc {
        export = export.with_zone(RowZone::Utc);
    }
    let mut report = ReportOptions::default();
    if let Some(logo) = &args.logo {
        report = report.with_logo(logo);
    }

    let config = RunConfig::new(&args.address, &args.name, args.from, args.to)
        .with_output_dir(&args.output_dir)
        .with_export(export)
        .with_report(report);

    let client = match &args.api_url {
        Some(url) => HistoryClient::with_base_url(url),
        None => HistoryClient::new(),
    }?;
    run(&config, &client)
}

/// Run the `columns` subcommand: print the report columns in order.
pub fn run_columns() {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["#", "Column"]);
    for (position, column) in REPORT_COLUMNS.iter().enumerate() {
        table.add_row(vec![(position + 1).to_string(), (*column).to_string()]);
    }
    println!("{table}");
}
