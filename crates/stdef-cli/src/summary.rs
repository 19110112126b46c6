//! Run summary rendering for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use stdef_model::ErrorCode;

use crate::types::AnalysisResult;

pub fn print_summary(result: &AnalysisResult) {
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    if let Some(path) = &result.summary_path {
        println!("Summary: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Meaning"),
        header_cell("Fields"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for code in ErrorCode::ALL {
        let count = result.code_counts.get(&code).copied().unwrap_or(0);
        table.add_row(vec![
            code_cell(code),
            Cell::new(code.describe()),
            Cell::new(count),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("All validated fields").fg(Color::Cyan),
        Cell::new(result.records).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!(
        "Lines: {} processed, {} truncated, {} skipped",
        result.lines_processed,
        result.truncated_lines,
        result.lines_skipped.len()
    );
    if !result.lines_skipped.is_empty() {
        eprintln!("Skipped lines:");
        for skipped in &result.lines_skipped {
            eprintln!("- line {}: {}", skipped.line_number, skipped.reason);
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn code_cell(code: ErrorCode) -> Cell {
    let cell = Cell::new(code);
    match code {
        ErrorCode::E01 => cell.fg(Color::Green),
        ErrorCode::E05 => cell.fg(Color::Yellow),
        _ => cell.fg(Color::Red),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
