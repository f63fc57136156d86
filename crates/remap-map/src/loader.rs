//! Mapping table loader.
//!
//! Loading runs in three passes over one read of the source:
//!
//! 1. Structural checks: header present, requested columns present and
//!    unique, every data row either empty or as wide as the header.
//! 2. Materialization: blank rows are dropped, cells stay verbatim (an empty
//!    cell is an empty string).
//! 3. Mapping construction: first occurrence of a find string wins, later
//!    occurrences are collected and reported together.

use std::collections::HashSet;

use remap_model::{Insertion, MappingTable, MappingTableBuilder, SourceRow, TabularSource};
use tracing::debug;

use crate::error::{MappingLoadError, Result};

/// A structurally valid table: a header and rows as wide as the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CheckedTable {
    /// Returns the position of `name` in the header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// Reads `source` and validates its shape.
///
/// `required_columns` must each appear exactly once in the header. A table with
/// a header and no data rows is valid here.
pub fn read_checked_table<S>(source: &S, required_columns: &[&str]) -> Result<CheckedTable>
where
    S: TabularSource + ?Sized,
{
    let location = source.describe();
    let mut rows = source
        .rows()
        .map_err(|e| MappingLoadError::unreadable(&location, e))?;

    let headers = match rows.next() {
        Some(row) => row.map_err(|e| MappingLoadError::unreadable(&location, e))?,
        None => return Err(MappingLoadError::NoHeaderRow { location }),
    };
    if headers.is_empty() {
        return Err(MappingLoadError::NoHeaderRow { location });
    }
    let SourceRow { cells: headers, .. } = headers;
    let width = headers.len();

    let mut data_rows = Vec::new();
    let mut broken_lines = Vec::new();
    for row in rows {
        let row = row.map_err(|e| MappingLoadError::unreadable(&location, e))?;
        if row.is_empty() {
            continue;
        }
        if row.len() != width {
            broken_lines.push(row.line);
            continue;
        }
        data_rows.push(row.cells);
    }

    let missing = missing_columns(&headers, required_columns);
    let duplicated = duplicated_columns(&headers, required_columns);

    if !missing.is_empty() {
        return Err(MappingLoadError::MissingColumn {
            location,
            columns: missing,
        });
    }
    if !duplicated.is_empty() {
        return Err(MappingLoadError::DuplicatedColumn {
            location,
            columns: duplicated,
        });
    }
    if !broken_lines.is_empty() {
        return Err(MappingLoadError::BrokenRow {
            location,
            expected: width,
            lines: broken_lines,
        });
    }

    Ok(CheckedTable {
        headers,
        rows: data_rows,
    })
}

/// Loads the ordered find/replace mapping from two columns of `source`.
///
/// # Errors
///
/// Fails with the first applicable [`MappingLoadError`] in this order:
/// unreadable source, missing header, missing columns, duplicated columns,
/// broken rows, no data rows, duplicated find values, blank find value.
pub fn load_mapping<S>(source: &S, find_column: &str, replace_column: &str) -> Result<MappingTable>
where
    S: TabularSource + ?Sized,
{
    let table = read_checked_table(source, &[find_column, replace_column])?;
    let location = source.describe();
    if table.rows.is_empty() {
        return Err(MappingLoadError::EmptyResultSet { location });
    }

    let (Some(find_idx), Some(replace_idx)) = (
        table.column_index(find_column),
        table.column_index(replace_column),
    ) else {
        // read_checked_table guarantees both columns are present.
        return Err(MappingLoadError::MissingColumn {
            location,
            columns: missing_columns(&table.headers, &[find_column, replace_column]),
        });
    };

    let mut builder = MappingTableBuilder::new();
    let mut duplicated = Vec::new();
    let mut seen_duplicates = HashSet::new();
    for row in &table.rows {
        let find = &row[find_idx];
        let replace = &row[replace_idx];
        if builder.insert(find.as_str(), replace.as_str()) == Insertion::Duplicate
            && seen_duplicates.insert(find.clone())
        {
            duplicated.push(find.clone());
        }
    }

    if !duplicated.is_empty() {
        return Err(MappingLoadError::DuplicatedFindValue {
            location,
            values: duplicated,
        });
    }
    if builder.contains("") {
        return Err(MappingLoadError::BlankFindValue { location });
    }

    let mapping = builder.build();
    debug!(
        source = %location,
        rows = table.rows.len(),
        rules = mapping.len(),
        "mapping table loaded"
    );
    Ok(mapping)
}

fn missing_columns(headers: &[String], required: &[&str]) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for &column in required {
        if !headers.iter().any(|h| h == column) && !missing.iter().any(|m| m == column) {
            missing.push(column.to_string());
        }
    }
    missing
}

fn duplicated_columns(headers: &[String], required: &[&str]) -> Vec<String> {
    let mut duplicated: Vec<String> = Vec::new();
    for &column in required {
        let count = headers.iter().filter(|h| *h == column).count();
        if count > 1 && !duplicated.iter().any(|d| d == column) {
            duplicated.push(column.to_string());
        }
    }
    duplicated
}
