use std::path::Path;

use crate::checker::{FileRecord, Ranker, ThresholdSelector};
use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult, ScanConfig, ScanOptions};
use crate::counter::LineCounter;
use crate::error::Result;
use crate::output::ScanReport;
use crate::output::path::display_path;
use crate::scanner::{ExtensionFilter, FileFilter, Walker, resolve_path};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

pub fn run_scan(cli: &Cli) -> i32 {
    match run_scan_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load configuration, scan, and print the report to stdout.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, the working
/// directory cannot be determined, or the report cannot be rendered.
pub fn run_scan_impl(cli: &Cli) -> Result<i32> {
    let cwd = std::env::current_dir()?;

    // 1. Load configuration
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    if cli.verbose > 0 {
        match &loaded.source {
            Some(path) => eprintln!("Using config: {}", path.display()),
            None => eprintln!("Using built-in defaults"),
        }
    }

    // 2. Anchor config-file paths at the file's directory, then apply CLI overrides
    let mut scan_config = loaded.config.scan;
    if let Some(config_dir) = loaded.source.as_deref().and_then(Path::parent) {
        scan_config.rebase_paths(&resolve_path(config_dir, &cwd));
    }
    apply_cli_overrides(&mut scan_config, cli);

    // 3. Resolve effective options
    let options = ScanOptions::from_config(&scan_config, &cwd);
    options.validate()?;
    for root in &options.roots {
        if !root.exists() {
            eprintln!("warning: root does not exist: {}", root.path.display());
        } else if cli.verbose > 0 {
            eprintln!("Scanning {}", root.path.display());
        }
    }

    // 4. Scan, count, select, rank
    let files = collect_files(&options, cli.verbose);

    // 5. Render and write
    let output = options
        .format
        .formatter()
        .format(&ScanReport::new(&options, &files))?;
    print!("{output}");

    Ok(EXIT_SUCCESS)
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Merge command-line values over the file configuration.
///
/// Scalars and `--ext` replace the configured value; `--ignore-dir` entries
/// are appended.
pub fn apply_cli_overrides(config: &mut ScanConfig, cli: &Cli) {
    if !cli.roots.is_empty() {
        config.roots.clone_from(&cli.roots);
    }

    if let Some(min_lines) = cli.min_lines {
        config.min_lines = Some(min_lines);
    }

    if let Some(top) = cli.top {
        config.top = Some(top);
    }

    if let Some(ext) = &cli.ext {
        config.extensions = Some(ext.clone());
    }

    config.ignore_dirs.extend(cli.ignore_dirs.iter().cloned());

    if let Some(relative_to) = &cli.relative_to {
        config.relative_to = Some(relative_to.clone());
    }

    if let Some(format) = cli.format {
        config.format = Some(format);
    }
}

/// Run the walk/filter/count/select/rank pipeline.
///
/// Files that cannot be read are skipped; with `verbose >= 2` each skip is
/// reported on stderr.
#[must_use]
pub fn collect_files(options: &ScanOptions, verbose: u8) -> Vec<FileRecord> {
    let walker = Walker::new(options.roots.clone(), options.ignore_dirs.iter().cloned());
    let filter = ExtensionFilter::new(&options.extensions);
    let counter = LineCounter::new();

    let counted = walker
        .candidates()
        .filter(|path| filter.should_include(path))
        .filter_map(|path| match counter.count_file(&path) {
            Ok(lines) => Some(FileRecord::new(
                display_path(&path, &options.relative_to),
                lines,
            )),
            Err(e) => {
                if verbose >= 2 {
                    eprintln!("Skipping {}: {e}", path.display());
                }
                None
            }
        });

    let selected: Vec<_> = ThresholdSelector::new(options.min_lines)
        .select(counted)
        .collect();
    if verbose > 0 {
        eprintln!(
            "{} file(s) with >= {} lines",
            selected.len(),
            options.min_lines
        );
    }

    Ranker::new(options.top).rank(selected)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
