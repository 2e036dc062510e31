use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use salary_cli::logging::redact_value;
use salary_cli::types::ProcessResult;

pub fn print_summary(result: &ProcessResult) {
    println!("Entity: {}", result.entity);
    println!("Template: {}", result.template.display());
    println!("Output: {}", result.output.display());

    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows read"),
        header_cell("Rows written"),
        header_cell("Salary fallbacks"),
        header_cell("Unmapped genders"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.rows_read),
        Cell::new(report.rows_written),
        count_cell(report.salary_fallbacks.len(), Color::Yellow),
        count_cell(report.unmapped_gender_rows(), Color::Yellow),
    ]);
    println!("{table}");
    print_findings(result);
}

fn print_findings(result: &ProcessResult) {
    let report = &result.report;
    if report.is_clean() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Finding"),
        header_cell("Value"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for fallback in &report.salary_fallbacks {
        table.add_row(vec![
            Cell::new("salary written as 0.00").fg(Color::Yellow),
            value_cell(redact_value(&fallback.raw)),
            Cell::new(fallback.row),
        ]);
    }
    for (value, rows) in &report.unmapped_genders {
        table.add_row(vec![
            Cell::new("gender passed through").fg(Color::Yellow),
            value_cell(value),
            Cell::new(rows),
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(value)
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
