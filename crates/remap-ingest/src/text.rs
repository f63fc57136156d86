//! Whole-file text reading and writing.
//!
//! Content is decoded and encoded as-is: no newline translation and no BOM
//! handling, so bytes outside replaced spans survive a round trip.

use std::path::Path;

use tracing::debug;

use crate::encoding::EncodingName;
use crate::error::{IngestError, Result};

/// Reads and decodes a whole text file.
pub fn read_text(path: &Path, encoding: EncodingName) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::read(path, e))?;
    let text = encoding
        .decode(&bytes, false)
        .ok_or_else(|| IngestError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read text");
    Ok(text.into_owned())
}

/// Encodes `text` and writes it to `path`, replacing any existing file.
pub fn write_text(path: &Path, text: &str, encoding: EncodingName) -> Result<()> {
    let bytes = encoding.encode(text).ok_or_else(|| IngestError::Unmappable {
        path: path.to_path_buf(),
        encoding: encoding.name(),
    })?;
    std::fs::write(path, &bytes).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote text");
    Ok(())
}
