//! Error types for mapping table loading.

use std::io;

use thiserror::Error;

/// Errors raised while loading a mapping table.
///
/// Variants that describe several violations carry all of them so a single
/// report lists every problem of that kind.
#[derive(Debug, Error)]
pub enum MappingLoadError {
    #[error("failed to read {location}: {source}")]
    SourceUnreadable {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("no columns to parse from {location}")]
    NoHeaderRow { location: String },

    #[error("necessary columns are missing in {location}: {}", quoted(.columns))]
    MissingColumn {
        location: String,
        columns: Vec<String>,
    },

    #[error("columns are duplicated in {location}: {}", quoted(.columns))]
    DuplicatedColumn {
        location: String,
        columns: Vec<String>,
    },

    #[error(
        "{expected} columns are expected in {location}, but not at: {}",
        line_list(.lines)
    )]
    BrokenRow {
        location: String,
        expected: usize,
        lines: Vec<u64>,
    },

    #[error("no data rows in {location}")]
    EmptyResultSet { location: String },

    #[error("duplicated values in find strings of {location}: {}", quoted(.values))]
    DuplicatedFindValue {
        location: String,
        values: Vec<String>,
    },

    #[error("blank string in find strings of {location}")]
    BlankFindValue { location: String },
}

impl MappingLoadError {
    pub(crate) fn unreadable(location: impl Into<String>, source: io::Error) -> Self {
        Self::SourceUnreadable {
            location: location.into(),
            source,
        }
    }
}

fn quoted(values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn line_list(lines: &[u64]) -> String {
    lines
        .iter()
        .map(|line| format!("line {line}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingLoadError>;
