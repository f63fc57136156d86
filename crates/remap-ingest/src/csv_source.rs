//! CSV file as a [`TabularSource`].

use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use remap_model::{RowIter, SourceRow, TabularSource};
use tracing::debug;

use crate::encoding::EncodingName;

/// A CSV file read with an explicit encoding.
///
/// The whole file is decoded up front (a leading BOM is dropped) and then
/// parsed with RFC 4180 quoting. Header cells are returned verbatim. Rows may
/// have any width; width checks are left to the consumer.
///
/// Rows are numbered by record, not by physical line: a blank line is a
/// zero-cell row, and a quoted cell spanning several lines still counts as
/// one row.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    encoding: EncodingName,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, encoding: EncodingName) -> Self {
        Self {
            path: path.into(),
            encoding,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decoded(&self) -> io::Result<String> {
        let bytes = std::fs::read(&self.path)?;
        let text = self.encoding.decode(&bytes, true).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("content is not valid {}", self.encoding),
            )
        })?;
        debug!(
            path = %self.path.display(),
            encoding = %self.encoding,
            bytes = bytes.len(),
            "decoded csv"
        );
        Ok(text.into_owned())
    }
}

impl TabularSource for CsvSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn rows(&self) -> io::Result<RowIter<'_>> {
        let text = self.decoded()?;
        let records: Vec<String> = split_records(&text)
            .into_iter()
            .map(str::to_string)
            .collect();
        let rows = records.into_iter().zip(1u64..).map(|(record, line)| {
            parse_record(&record).map(|cells| SourceRow::new(line, cells))
        });
        Ok(Box::new(rows))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
    FieldStart,
    Unquoted,
    Quoted,
    /// A quote seen inside a quoted field: either an escape or the close.
    QuotedQuote,
}

/// Splits `text` into raw records at line terminators outside quoted fields.
///
/// `\n`, `\r\n` and a lone `\r` all end a record. An empty line yields an
/// empty record; a trailing terminator does not start a new one.
fn split_records(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut records = Vec::new();
    let mut state = ScanState::FieldStart;
    let mut start = 0;
    let mut idx = 0;
    while idx < bytes.len() {
        let byte = bytes[idx];
        state = match (state, byte) {
            (ScanState::Quoted, b'"') => ScanState::QuotedQuote,
            (ScanState::Quoted, _) => ScanState::Quoted,
            (ScanState::QuotedQuote, b'"') | (ScanState::FieldStart, b'"') => ScanState::Quoted,
            (_, b',') => ScanState::FieldStart,
            (_, b'\n' | b'\r') => {
                records.push(&text[start..idx]);
                if byte == b'\r' && bytes.get(idx + 1) == Some(&b'\n') {
                    idx += 1;
                }
                start = idx + 1;
                ScanState::FieldStart
            }
            _ => ScanState::Unquoted,
        };
        idx += 1;
    }
    if start < bytes.len() {
        records.push(&text[start..]);
    }
    records
}

/// Parses one raw record into cells. An empty record has no cells.
fn parse_record(record: &str) -> io::Result<Vec<String>> {
    if record.is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(record.as_bytes());
    let mut cells = StringRecord::new();
    if !reader.read_record(&mut cells).map_err(io::Error::from)? {
        return Ok(Vec::new());
    }
    Ok(cells.iter().map(str::to_string).collect())
}
