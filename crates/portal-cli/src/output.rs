//! Table and JSON rendering of command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use portal_core::{ColumnReport, DatasetStats, UploadSummary};
use portal_map::ColumnRole;
use portal_model::{LookupResult, Status};
use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn upload_table(summary: &UploadSummary) -> Table {
    let mut table = field_table();
    table.add_row(vec![label_cell("Stored As"), Cell::new(&summary.file_name)]);
    table.add_row(vec![label_cell("Students"), Cell::new(summary.rows)]);
    table.add_row(vec![
        label_cell("Columns"),
        Cell::new(summary.columns.join(", ")),
    ]);
    table.add_row(vec![label_cell("Encoding"), Cell::new(summary.encoding)]);
    table.add_row(vec![label_cell("Delimiter"), Cell::new(summary.delimiter)]);
    table
}

pub fn result_table(result: &LookupResult) -> Table {
    let mut table = field_table();
    table.add_row(vec![label_cell("Seat Number"), Cell::new(&result.seat_number)]);
    table.add_row(vec![label_cell("Name"), Cell::new(&result.name)]);
    table.add_row(vec![
        label_cell("Total Score"),
        Cell::new(format!("{} / {}", result.total_score, result.max_score)),
    ]);
    table.add_row(vec![label_cell("Status"), status_cell(&result.status)]);
    table.add_row(vec![label_cell("Rank"), Cell::new(format!("#{}", result.rank))]);
    table
}

pub fn stats_table(stats: &DatasetStats) -> Table {
    let mut table = field_table();
    table.add_row(vec![label_cell("Has Data"), yes_no_cell(stats.has_data)]);
    table.add_row(vec![
        label_cell("Total Students"),
        Cell::new(stats.total_students).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![label_cell("CSV File"), Cell::new(&stats.csv_file_path)]);
    table.add_row(vec![label_cell("File Exists"), yes_no_cell(stats.file_exists)]);
    if let Some(columns) = &stats.columns {
        table.add_row(vec![label_cell("Columns"), Cell::new(columns.join(", "))]);
    }
    if let Some(sha256) = &stats.sha256 {
        table.add_row(vec![label_cell("SHA-256"), dim_cell(sha256)]);
    }
    table
}

/// Sample records as a table with the dataset's own header.
pub fn sample_table(stats: &DatasetStats) -> Option<Table> {
    let columns = stats.columns.as_ref()?;
    let sample = stats.sample_data.as_ref()?;
    let mut table = Table::new();
    table.set_header(columns.iter().map(|name| header_cell(name)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for record in sample {
        table.add_row(
            columns
                .iter()
                .map(|name| Cell::new(record.get(name).unwrap_or("")))
                .collect::<Vec<_>>(),
        );
    }
    Some(table)
}

pub fn columns_table(report: &ColumnReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Column")]);
    apply_table_style(&mut table);
    for role in ColumnRole::ALL {
        let column = match report.resolved.get(role) {
            Some(name) => Cell::new(name),
            None => dim_cell("-"),
        };
        table.add_row(vec![label_cell(role.label()), column]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn field_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table
}

fn status_cell(status: &Status) -> Cell {
    let color = match status {
        Status::Pass => Color::Green,
        Status::Fail => Color::Red,
        Status::Unknown | Status::Other(_) => Color::Yellow,
    };
    Cell::new(status).fg(color).add_attribute(Attribute::Bold)
}

fn yes_no_cell(value: bool) -> Cell {
    if value {
        Cell::new("yes").fg(Color::Green)
    } else {
        dim_cell("no")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
