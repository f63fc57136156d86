use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use remap_cli::types::{FileStatus, FileSummary, RunResult};
use remap_model::MappingTable;

pub fn print_summary(result: &RunResult) {
    println!("Mapping CSV: {} ({} rules)", result.mapping_csv.display(), result.rules);
    println!("Output: {}", result.output_dir.display());
    if result.dry_run {
        println!("Dry run: no files written");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Rules"),
        header_cell("Replacements"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for file in &result.files {
        table.add_row(vec![
            Cell::new(file_name(&file.input)),
            status_cell(&file.status),
            count_cell(file.rules_applied),
            count_cell(file.replacements),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{}/{}", result.files.len() - result.failed_count(), result.files.len()))
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.total_replacements()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_failures(&result.files);
}

/// Lists the rules of a mapping in application order.
pub fn print_mapping(mapping: &MappingTable) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Find"), header_cell("Replace")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, entry) in mapping.iter().enumerate() {
        let replace = if entry.replace.is_empty() {
            dim_cell("(empty)")
        } else {
            Cell::new(&entry.replace)
        };
        table.add_row(vec![Cell::new(idx + 1), Cell::new(&entry.find), replace]);
    }
    println!("{table}");
    println!("{} rules OK", mapping.len());
}

fn print_failures(files: &[FileSummary]) {
    let failures: Vec<&FileSummary> = files.iter().filter(|f| f.is_failed()).collect();
    if failures.is_empty() {
        return;
    }
    eprintln!("Some files failed to be processed:");
    for file in failures {
        if let FileStatus::Failed { stage, message } = &file.status {
            eprintln!("- [{}] {}: {message}", stage.as_str(), file.input.display());
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(3)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: &FileStatus) -> Cell {
    match status {
        FileStatus::Written => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        FileStatus::Skipped => dim_cell("dry-run"),
        FileStatus::Failed { stage, .. } => Cell::new(format!("✗ {}", stage.as_str()))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
