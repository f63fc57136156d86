use std::path::PathBuf;

/// Stage at which a text failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    Read,
    Write,
}

impl FailureStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Substituted text written to `output`.
    Written,
    /// Substituted in memory only (`--dry-run`).
    Skipped,
    Failed {
        stage: FailureStage,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct FileSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub status: FileStatus,
    pub replacements: usize,
    pub rules_applied: usize,
}

impl FileSummary {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed { .. })
    }
}

#[derive(Debug)]
pub struct RunResult {
    pub mapping_csv: PathBuf,
    pub rules: usize,
    pub output_dir: PathBuf,
    pub files: Vec<FileSummary>,
    pub dry_run: bool,
}

impl RunResult {
    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|file| file.is_failed()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.failed_count() > 0
    }

    pub fn total_replacements(&self) -> usize {
        self.files.iter().map(|file| file.replacements).sum()
    }
}
