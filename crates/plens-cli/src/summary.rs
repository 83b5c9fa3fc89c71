//! Result summaries printed after a command finishes.

use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use plens_model::ImageFormat;

/// Outcome of `plens mine`.
pub struct MineSummary {
    pub output: PathBuf,
    pub format: ImageFormat,
    pub threshold: f64,
    pub min_frequency: u64,
    pub max_frequency: u64,
    pub nodes: usize,
    pub edges: usize,
}

/// Outcome of `plens info`.
pub struct LogSummary {
    pub path: PathBuf,
    pub cases: usize,
    pub events: usize,
    pub max_frequency: u64,
    /// Per-activity occurrence counts, sorted by name.
    pub activities: Vec<(String, u64)>,
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_mine_summary(summary: &MineSummary) {
    println!("Output: {} ({})", summary.output.display(), summary.format);
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Threshold"),
        header_cell("Min freq"),
        header_cell("Max freq"),
        header_cell("Activities"),
        header_cell("Dependencies"),
    ]);
    table.add_row(vec![
        Cell::new(format!("{:.2}", summary.threshold)),
        Cell::new(summary.min_frequency),
        Cell::new(summary.max_frequency),
        Cell::new(summary.nodes),
        Cell::new(summary.edges),
    ]);
    println!("{table}");
}

pub fn print_log_summary(summary: &LogSummary) {
    println!("Event log: {}", summary.path.display());
    println!(
        "Cases: {}  Events: {}  Max activity frequency: {}",
        summary.cases, summary.events, summary.max_frequency
    );
    let mut table = base_table();
    table.set_header(vec![header_cell("Activity"), header_cell("Frequency")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (name, frequency) in &summary.activities {
        table.add_row(vec![Cell::new(name), Cell::new(frequency)]);
    }
    println!("{table}");
}
