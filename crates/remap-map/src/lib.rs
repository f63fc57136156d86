#![deny(unsafe_code)]

//! Mapping table loader and text substitution engine.
//!
//! [`load_mapping`] turns a [`TabularSource`](remap_model::TabularSource) into a
//! validated [`MappingTable`](remap_model::MappingTable); [`apply_mapping`] runs
//! its rules over a text in order.

pub mod engine;
pub mod error;
pub mod loader;

pub use engine::{SubstitutionOutcome, apply_mapping, apply_mapping_with_stats};
pub use error::{MappingLoadError, Result};
pub use loader::{CheckedTable, load_mapping, read_checked_table};
