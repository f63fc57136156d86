//! Core data types shared by the remap crates.
//!
//! - [`MappingTable`]: ordered, immutable find/replace pairs.
//! - [`TabularSource`]: sequential row access over a header + data rows table.
//! - [`RowTable`]: in-memory tabular source.

pub mod mapping;
pub mod table;

pub use mapping::{Insertion, MappingEntry, MappingTable, MappingTableBuilder};
pub use table::{RowIter, RowTable, SourceRow, TabularSource};
