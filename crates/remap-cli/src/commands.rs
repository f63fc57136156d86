use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use remap_map::load_mapping;
use remap_model::MappingTable;
use tracing::{info, info_span};

use remap_cli::config::{Config, MappingCsvConfig, TextOrigin};
use remap_cli::pipeline::{ProcessOptions, process_texts};
use remap_cli::types::RunResult;

use crate::cli::{CheckArgs, RunArgs};

pub fn run_replace(args: &RunArgs) -> Result<RunResult> {
    let run_span = info_span!("run", config = %args.config.display());
    let _run_guard = run_span.enter();

    let config = load_config(&args.config)?;
    let texts = &config.input.texts;
    match &texts.origin {
        TextOrigin::Folder(folder) => info!(
            folder = %folder.display(),
            file_count = texts.paths.len(),
            encoding = %texts.encoding,
            "input texts"
        ),
        TextOrigin::File(path) => info!(
            path = %path.display(),
            encoding = %texts.encoding,
            "input text"
        ),
    }

    let mapping = load_mapping_csv(&config.input.mapping_csv)?;

    let options = ProcessOptions {
        encoding: texts.encoding,
        output_dir: config.output.folder_path.clone(),
        dry_run: args.dry_run,
    };
    let files = process_texts(&texts.paths, &mapping, &options);

    Ok(RunResult {
        mapping_csv: config.input.mapping_csv.path.clone(),
        rules: mapping.len(),
        output_dir: config.output.folder_path,
        files,
        dry_run: args.dry_run,
    })
}

pub fn run_check(args: &CheckArgs) -> Result<MappingTable> {
    let check_span = info_span!("check", config = %args.config.display());
    let _check_guard = check_span.enter();

    let config = load_config(&args.config)?;
    load_mapping_csv(&config.input.mapping_csv)
}

fn load_config(path: &Path) -> Result<Config> {
    let config = Config::from_yaml_file(path)
        .with_context(|| format!("failed to parse the config file: {}", path.display()))?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

fn load_mapping_csv(csv: &MappingCsvConfig) -> Result<MappingTable> {
    let start = Instant::now();
    let mapping = load_mapping(&csv.source(), &csv.find_column, &csv.replace_column)
        .with_context(|| format!("failed to load mapping CSV: {}", csv.path.display()))?;
    info!(
        path = %csv.path.display(),
        encoding = %csv.encoding,
        rules = mapping.len(),
        duration_ms = start.elapsed().as_millis(),
        "mapping loaded"
    );
    Ok(mapping)
}
