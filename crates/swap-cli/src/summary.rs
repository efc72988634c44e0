//! End-of-run terminal summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::pipeline::RunReport;

/// Print the run summary: window, swap count, and where the files went.
pub fn print_summary(report: &RunReport) {
    println!(
        "Report window {} to {}, {} swap(s)",
        report.window.0.format("%Y-%m-%d"),
        report.window.1.format("%Y-%m-%d"),
        report.swap_count
    );

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Output"), header_cell("Path")]);
    table.add_row(vec![Cell::new("CSV"), Cell::new(report.csv_path.display())]);
    table.add_row(vec![Cell::new("PDF"), Cell::new(report.pdf_path.display())]);
    println!("{table}");
}

/// House style for terminal tables.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
