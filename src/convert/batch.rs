//! Directory walk and per-file dispatch

use std::fs;
use std::path::Path;
use std::time::Instant;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use super::{CommandRunner, ConvertError, Mode, RunConfig};
use crate::report::{FileFailure, RunSummary};
use crate::utils::{create_spinner, print_file_error, print_info, print_progress};

/// Convert every matching file under `config.root_dir`.
///
/// Output directories are created first. Files are processed one at a time in
/// walk order; a failing external command is recorded in the summary and the
/// walk continues. Directory creation and traversal errors are fatal.
pub fn run_batch<R>(config: &RunConfig, runner: &mut R) -> Result<RunSummary, ConvertError>
where
    R: CommandRunner + ?Sized,
{
    let start = Instant::now();

    create_output_dirs(config)?;

    log::info!(
        "{} run: root={} output={}",
        config.mode,
        config.root_dir.display(),
        config.layer_dir().display()
    );

    let mut summary = RunSummary::new(config);
    let spinner = create_spinner(&format!("Scanning {}...", config.root_dir.display()));
    let walked = walk_and_convert(config, runner, &spinner, &mut summary);
    spinner.finish_and_clear();
    walked?;

    summary.elapsed = start.elapsed();
    print_info(&format!(
        "Stored GeoJSON files in: {}",
        config.output_dir.display()
    ));
    log::info!(
        "{} run finished: {} converted, {} failed, {} skipped",
        config.mode,
        summary.converted.len(),
        summary.failures.len(),
        summary.skipped
    );

    Ok(summary)
}

/// Create the output directory and, for ENC, its layer directory.
pub fn create_output_dirs(config: &RunConfig) -> Result<(), ConvertError> {
    let mut dirs = vec![config.output_dir.clone()];
    if config.layer_name.is_some() {
        dirs.push(config.layer_dir());
    }

    for dir in dirs {
        fs::create_dir_all(&dir).map_err(|source| ConvertError::CreateDir { path: dir, source })?;
    }
    Ok(())
}

fn walk_and_convert<R>(
    config: &RunConfig,
    runner: &mut R,
    spinner: &ProgressBar,
    summary: &mut RunSummary,
) -> Result<(), ConvertError>
where
    R: CommandRunner + ?Sized,
{
    for entry in WalkDir::new(&config.root_dir).sort_by_file_name() {
        let entry = entry.map_err(|source| ConvertError::Walk {
            root: config.root_dir.clone(),
            source,
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !config.mode.matches(&file_name) {
            log::trace!("skip {}", entry.path().display());
            summary.skipped += 1;
            continue;
        }

        spinner.set_message(file_name.to_string());
        convert_file(config, runner, entry.path(), &file_name, spinner, summary);
    }
    Ok(())
}

fn convert_file<R>(
    config: &RunConfig,
    runner: &mut R,
    path: &Path,
    file_name: &str,
    spinner: &ProgressBar,
    summary: &mut RunSummary,
) where
    R: CommandRunner + ?Sized,
{
    summary.matched += 1;
    let invocation = config.invocation(path);

    spinner.suspend(|| match (&config.mode, &config.layer_name) {
        (Mode::Enc, Some(layer)) => {
            print_progress(&format!("Parsing layer: {} from file: {}...", layer, file_name))
        }
        _ => print_progress(&format!("Parsing file: {}...", file_name)),
    });

    let outcome = runner.run(&invocation);
    if outcome.success {
        summary.converted.push(config.output_file(path));
        return;
    }

    log::warn!(
        "{} exited with {:?} for {}",
        invocation.program,
        outcome.status,
        path.display()
    );
    spinner.suspend(|| print_file_error(&invocation, &outcome.output));

    summary.failures.push(FileFailure {
        input: path.to_path_buf(),
        invocation,
        status: outcome.status,
        output: outcome.output,
    });
}
