use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use addr_cli::types::{IssueAction, MAX_RECORDED_ISSUES, RunResult};

/// Issues listed individually before the table is truncated.
const MAX_LISTED_ISSUES: usize = 20;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input_file.display());
    println!("Output: {}", result.output_file.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Records"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Read"), Cell::new(result.records_read)]);
    table.add_row(vec![
        Cell::new("Written"),
        Cell::new(result.records_written).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Skipped"),
        count_cell(result.records_skipped, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Kept with errors"),
        count_cell(result.records_kept_with_errors, Color::Yellow),
    ]);
    table.add_row(vec![dim_cell("Batches"), dim_cell(result.batches)]);
    table.add_row(vec![
        dim_cell("Duration (ms)"),
        dim_cell(result.duration_ms),
    ]);
    println!("{table}");
    print_issue_table(result);
}

fn print_issue_table(result: &RunResult) {
    if result.issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record"),
        header_cell("Column"),
        header_cell("Action"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for issue in result.issues.iter().take(MAX_LISTED_ISSUES) {
        table.add_row(vec![
            Cell::new(issue.row),
            Cell::new(&issue.column),
            action_cell(issue.action),
            Cell::new(&issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
    let listed = result.issues.len().min(MAX_LISTED_ISSUES);
    if result.error_count() > listed {
        eprintln!(
            "... and {} more (see --summary-json for the first {MAX_RECORDED_ISSUES})",
            result.error_count() - listed
        );
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn action_cell(action: IssueAction) -> Cell {
    match action {
        IssueAction::Skipped => Cell::new("SKIPPED").fg(Color::Red),
        IssueAction::Kept => Cell::new("KEPT").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
