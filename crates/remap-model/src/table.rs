//! Row-oriented access to header + data tables.

use std::io;

/// One record of a tabular source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based record number; the header is line 1.
    pub line: u64,
    pub cells: Vec<String>,
}

impl SourceRow {
    pub fn new(line: u64, cells: Vec<String>) -> Self {
        Self { line, cells }
    }

    /// Returns true for rows without any cell (blank lines).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

/// Boxed row iterator returned by [`TabularSource::rows`].
pub type RowIter<'a> = Box<dyn Iterator<Item = io::Result<SourceRow>> + 'a>;

/// A table that can be read front to back, header row first.
///
/// Every record is yielded, blank lines included as zero-cell rows, and
/// `line` is the 1-based ordinal of the record. A record whose cell spans
/// several physical lines still counts once.
pub trait TabularSource {
    /// Human-readable location of the source, used in error messages.
    fn describe(&self) -> String;

    /// Opens the source and returns its rows in order.
    fn rows(&self) -> io::Result<RowIter<'_>>;
}

/// In-memory [`TabularSource`].
#[derive(Debug, Clone, Default)]
pub struct RowTable {
    name: String,
    rows: Vec<Vec<String>>,
}

impl RowTable {
    /// Builds a table from string-like cells. The first row is the header.
    pub fn from_rows<R, C>(name: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            name: name.into(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

impl TabularSource for RowTable {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn rows(&self) -> io::Result<RowIter<'_>> {
        Ok(Box::new(self.rows.iter().zip(1u64..).map(|(cells, line)| {
            Ok::<_, io::Error>(SourceRow::new(line, cells.clone()))
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_table_numbers_lines_from_one() {
        let table = RowTable::from_rows("mem", [vec!["a", "b"], vec![], vec!["1", "2"]]);
        let rows: Vec<SourceRow> = table
            .rows()
            .unwrap()
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].line, 1);
        assert!(rows[1].is_empty());
        assert_eq!(rows[2].line, 3);
        assert_eq!(rows[2].cells, vec!["1", "2"]);
    }
}
