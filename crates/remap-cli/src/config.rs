//! YAML run configuration.
//!
//! The file is deserialized into raw records that mirror the YAML layout, then
//! checked against the filesystem once and turned into immutable [`Config`]
//! values. Nothing past this module re-validates paths or encodings.
//!
//! ```yaml
//! INPUT:
//!   ORIGINAL_TXTS:
//!     FOLDER_PATH: ./txts
//!     ENCODING: utf-8
//!   REPLACE_MAPPING_CSV:
//!     PATH: ./mapping.csv
//!     ENCODING: utf-8
//!     FIND_STRING_COLUMN: find
//!     REPLACE_STRING_COLUMN: replace
//! OUTPUT:
//!   FOLDER_PATH: ./out
//! ```
//!
//! `ENCODING` takes a WHATWG label (`utf-8`, `shift_jis`, `euc-kr`,
//! `windows-1252`, `utf-16le`, ...) or a common codec name such as `cp932`,
//! `utf_8` or `utf-8-sig`. `ascii` and `latin1` both mean `windows-1252`.
//! `utf-8-sig` is read as `utf-8`; a BOM is stripped from the mapping CSV and
//! kept in texts either way.

use std::path::{Path, PathBuf};

use remap_ingest::{
    CsvSource, EncodingName, IngestError, ensure_empty_dir, ensure_file, list_text_files,
};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid {field}: {source}")]
    Invalid {
        field: &'static str,
        #[source]
        source: IngestError,
    },

    #[error("exactly one of INPUT.ORIGINAL_TXTS and INPUT.ORIGINAL_TXT must be set")]
    TextInputChoice,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
struct RawConfig {
    input: RawInput,
    output: RawOutput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
struct RawInput {
    original_txts: Option<RawTxtsInFolder>,
    original_txt: Option<RawTxtFile>,
    replace_mapping_csv: RawMappingCsv,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
struct RawTxtsInFolder {
    folder_path: String,
    encoding: EncodingName,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
struct RawTxtFile {
    path: String,
    encoding: EncodingName,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
struct RawMappingCsv {
    path: String,
    encoding: EncodingName,
    find_string_column: String,
    replace_string_column: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
struct RawOutput {
    folder_path: String,
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone)]
pub struct InputConfig {
    pub texts: TextInput,
    pub mapping_csv: MappingCsvConfig,
}

/// Where the input texts come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOrigin {
    /// Every file in a folder.
    Folder(PathBuf),
    /// A single file.
    File(PathBuf),
}

/// Input texts sharing one encoding.
#[derive(Debug, Clone)]
pub struct TextInput {
    pub origin: TextOrigin,
    pub encoding: EncodingName,
    /// Files to process, sorted by file name.
    pub paths: Vec<PathBuf>,
}

/// Mapping CSV location and the two columns to read.
#[derive(Debug, Clone)]
pub struct MappingCsvConfig {
    pub path: PathBuf,
    pub encoding: EncodingName,
    pub find_column: String,
    pub replace_column: String,
}

impl MappingCsvConfig {
    pub fn source(&self) -> CsvSource {
        CsvSource::new(&self.path, self.encoding)
    }
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Existing, initially empty folder for the substituted texts.
    pub folder_path: PathBuf,
}

impl Config {
    /// Reads and validates a YAML configuration file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let raw: RawConfig =
            serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;
        Self::validate(raw)
    }

    /// Validates configuration given as YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let raw: RawConfig = serde_yaml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source: e,
        })?;
        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> Result<Self> {
        let RawConfig { input, output } = raw;

        let texts = match (input.original_txts, input.original_txt) {
            (Some(folder), None) => {
                let folder_path = clean_path(&folder.folder_path);
                let paths = list_text_files(&folder_path)
                    .map_err(invalid("INPUT.ORIGINAL_TXTS.FOLDER_PATH"))?;
                TextInput {
                    origin: TextOrigin::Folder(folder_path),
                    encoding: folder.encoding,
                    paths,
                }
            }
            (None, Some(file)) => {
                let path = clean_path(&file.path);
                ensure_file(&path).map_err(invalid("INPUT.ORIGINAL_TXT.PATH"))?;
                TextInput {
                    origin: TextOrigin::File(path.clone()),
                    encoding: file.encoding,
                    paths: vec![path],
                }
            }
            _ => return Err(ConfigError::TextInputChoice),
        };

        let csv = input.replace_mapping_csv;
        let csv_path = clean_path(&csv.path);
        ensure_file(&csv_path).map_err(invalid("INPUT.REPLACE_MAPPING_CSV.PATH"))?;

        let output_folder = clean_path(&output.folder_path);
        ensure_empty_dir(&output_folder).map_err(invalid("OUTPUT.FOLDER_PATH"))?;

        Ok(Self {
            input: InputConfig {
                texts,
                mapping_csv: MappingCsvConfig {
                    path: csv_path,
                    encoding: csv.encoding,
                    find_column: csv.find_string_column,
                    replace_column: csv.replace_string_column,
                },
            },
            output: OutputConfig {
                folder_path: output_folder,
            },
        })
    }
}

fn clean_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim())
}

fn invalid(field: &'static str) -> impl Fn(IngestError) -> ConfigError {
    move |source| ConfigError::Invalid { field, source }
}
