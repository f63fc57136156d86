//! File access for remap.
//!
//! This crate reads mapping CSVs and input texts with a configured encoding,
//! and writes substituted texts back out.
//!
//! # Features
//!
//! - **Encodings**: Validate encoding labels and decode/encode strictly
//! - **CSV Source**: Expose a CSV file as a [`TabularSource`](remap_model::TabularSource)
//! - **Texts**: Read and write whole text files without newline translation
//! - **Discovery**: List input texts in a folder and check output folders
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use remap_ingest::{CsvSource, EncodingName, list_text_files, read_text};
//!
//! let encoding = EncodingName::parse("utf-8")?;
//! let source = CsvSource::new("mapping.csv", encoding);
//! for path in list_text_files(Path::new("txts"))? {
//!     let text = read_text(&path, encoding)?;
//! }
//! ```

mod csv_source;
mod discovery;
mod encoding;
mod error;
mod text;

// === Error Types ===
pub use error::{IngestError, Result};

// === Encodings ===
pub use encoding::EncodingName;

// === CSV Reading ===
pub use csv_source::CsvSource;

// === Text Files ===
pub use text::{read_text, write_text};

// === File Discovery ===
pub use discovery::{ensure_empty_dir, ensure_file, list_text_files};
