//! Batch substitution over input texts.
//!
//! Each text is read, substituted, and written on its own. A failure is
//! recorded on that file's [`FileSummary`] and the batch moves on.

use std::path::{Path, PathBuf};
use std::time::Instant;

use remap_ingest::{EncodingName, read_text, write_text};
use remap_map::apply_mapping_with_stats;
use remap_model::MappingTable;
use tracing::{debug, error, info, info_span};

use crate::types::{FailureStage, FileStatus, FileSummary};

/// Settings shared by every text of one run.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Encoding used for both reading and writing texts.
    pub encoding: EncodingName,
    pub output_dir: PathBuf,
    /// Substitute without writing outputs.
    pub dry_run: bool,
}

/// Processes `inputs` in order against one mapping.
pub fn process_texts(
    inputs: &[PathBuf],
    mapping: &MappingTable,
    options: &ProcessOptions,
) -> Vec<FileSummary> {
    info!(
        file_count = inputs.len(),
        rules = mapping.len(),
        "processing texts"
    );
    let start = Instant::now();
    let summaries: Vec<FileSummary> = inputs
        .iter()
        .map(|input| process_text(input, mapping, options))
        .collect();
    let failed = summaries.iter().filter(|s| s.is_failed()).count();
    info!(
        file_count = summaries.len(),
        failed,
        duration_ms = start.elapsed().as_millis(),
        "texts processed"
    );
    summaries
}

/// Reads one text, applies `mapping`, and writes the result under the output
/// folder with the input's file name.
pub fn process_text(input: &Path, mapping: &MappingTable, options: &ProcessOptions) -> FileSummary {
    let span = info_span!("file", input = %input.display());
    let _guard = span.enter();

    let output = output_path(input, &options.output_dir);
    let mut summary = FileSummary {
        input: input.to_path_buf(),
        output: output.clone().unwrap_or_default(),
        status: FileStatus::Skipped,
        replacements: 0,
        rules_applied: 0,
    };

    info!("reading text");
    let original = match read_text(input, options.encoding) {
        Ok(text) => text,
        Err(err) => {
            error!(error = %err, "failed to read text");
            summary.status = failed(FailureStage::Read, err.to_string());
            return summary;
        }
    };

    let outcome = apply_mapping_with_stats(mapping, &original);
    debug!(
        replacements = outcome.replacements,
        rules_applied = outcome.rules_applied,
        "applied mapping"
    );
    summary.replacements = outcome.replacements;
    summary.rules_applied = outcome.rules_applied;

    let Some(output) = output else {
        let reason = format!("{} has no file name", input.display());
        error!(%reason, "failed to derive output path");
        summary.status = failed(FailureStage::Write, reason);
        return summary;
    };

    if options.dry_run {
        info!(output = %output.display(), "dry run, not writing");
        return summary;
    }

    info!(output = %output.display(), "writing text");
    match write_text(&output, &outcome.text, options.encoding) {
        Ok(()) => summary.status = FileStatus::Written,
        Err(err) => {
            error!(error = %err, "failed to write text");
            summary.status = failed(FailureStage::Write, err.to_string());
        }
    }
    summary
}

fn output_path(input: &Path, output_dir: &Path) -> Option<PathBuf> {
    input.file_name().map(|name| output_dir.join(name))
}

fn failed(stage: FailureStage, message: String) -> FileStatus {
    FileStatus::Failed { stage, message }
}
