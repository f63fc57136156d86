//! Error types for file access.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing remap inputs and outputs.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input folder holds no entries.
    #[error("no txts in the folder: {path}")]
    EmptyDirectory { path: PathBuf },

    /// Input folder holds something other than regular files.
    #[error("non-file object in the folder {path}: {entry}")]
    NonFileEntry { path: PathBuf, entry: PathBuf },

    /// Output folder must start out empty.
    #[error("output folder must be a blank folder: {path}")]
    DirectoryNotEmpty { path: PathBuf },

    /// File not found or not a regular file.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Encoding Errors ===
    /// Encoding label is not recognised.
    #[error("\"{label}\" is not supported as an encoding")]
    UnknownEncoding { label: String },

    /// Bytes are not valid in the configured encoding.
    #[error("{path} is not valid {encoding}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Text holds characters the configured encoding cannot represent.
    #[error("text for {path} cannot be encoded as {encoding}")]
    Unmappable {
        path: PathBuf,
        encoding: &'static str,
    },
}

impl IngestError {
    /// Maps an I/O error on `path` to `FileNotFound` or `FileRead`.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
