//! Input and output location checks.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists the input texts in a folder.
///
/// Every entry is treated as a text file. Fails if the folder is missing,
/// empty, or contains anything other than regular files. Returns files
/// sorted by filename.
pub fn list_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in read_entries(dir)? {
        if !path.is_file() {
            return Err(IngestError::NonFileEntry {
                path: dir.to_path_buf(),
                entry: path,
            });
        }
        files.push(path);
    }

    if files.is_empty() {
        return Err(IngestError::EmptyDirectory {
            path: dir.to_path_buf(),
        });
    }

    // Sort by filename
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Checks that `dir` exists and holds no entries.
pub fn ensure_empty_dir(dir: &Path) -> Result<()> {
    if read_entries(dir)?.is_empty() {
        Ok(())
    } else {
        Err(IngestError::DirectoryNotEmpty {
            path: dir.to_path_buf(),
        })
    }
}

/// Checks that `path` is an existing regular file.
pub fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

fn read_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    entries
        .map(|entry_result| {
            entry_result
                .map(|entry| entry.path())
                .map_err(|e| IngestError::DirectoryRead {
                    path: dir.to_path_buf(),
                    source: e,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &["b.txt", "a.txt", "notes.md"] {
            let path = dir.path().join(name);
            std::fs::write(&path, "content").unwrap();
        }

        dir
    }

    #[test]
    fn test_list_text_files() {
        let dir = create_test_dir();
        let files = list_text_files(dir.path()).unwrap();

        assert_eq!(files.len(), 3);
        // Sorted by filename, every extension accepted
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "notes.md"]);
    }

    #[test]
    fn test_list_text_files_empty_dir() {
        let dir = TempDir::new().unwrap();
        let result = list_text_files(dir.path());
        assert!(matches!(result, Err(IngestError::EmptyDirectory { .. })));
    }

    #[test]
    fn test_list_text_files_rejects_subdirectory() {
        let dir = create_test_dir();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        let result = list_text_files(dir.path());
        assert!(matches!(result, Err(IngestError::NonFileEntry { .. })));
    }

    #[test]
    fn test_list_text_files_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("test.txt");
        std::fs::write(&file_path, "data").unwrap();

        let result = list_text_files(&file_path);
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_ensure_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_empty_dir(dir.path()).is_ok());
        std::fs::write(dir.path().join("x"), "").unwrap();
        assert!(matches!(
            ensure_empty_dir(dir.path()),
            Err(IngestError::DirectoryNotEmpty { .. })
        ));
    }

    #[test]
    fn test_ensure_file() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_file(dir.path()).is_err());
        let file = dir.path().join("a.csv");
        std::fs::write(&file, "").unwrap();
        assert!(ensure_file(&file).is_ok());
    }
}
