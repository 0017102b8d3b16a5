//! Effective scan options: configuration values merged with built-in
//! defaults, clamped and resolved against the working directory.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::error::{LocScoutError, Result};
use crate::output::OutputFormat;
use crate::scanner::{ResolvedRoot, normalize_extension, resolve_path, resolve_roots};

use super::model::{
    DEFAULT_EXTENSIONS, DEFAULT_IGNORE_DIRS, DEFAULT_MIN_LINES, DEFAULT_TOP, ScanConfig,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub min_lines: usize,
    pub top: usize,
    pub extensions: IndexSet<String>,
    pub ignore_dirs: IndexSet<String>,
    pub roots: Vec<ResolvedRoot>,
    pub relative_to: PathBuf,
    pub format: OutputFormat,
}

impl ScanOptions {
    /// Build effective options from a (CLI-merged) scan config.
    ///
    /// Relative roots and `relative_to` are resolved against `cwd`.
    #[must_use]
    pub fn from_config(config: &ScanConfig, cwd: &Path) -> Self {
        let min_lines = clamp_to_usize(config.min_lines.unwrap_or(DEFAULT_MIN_LINES), 0);
        let top = clamp_to_usize(config.top.unwrap_or(DEFAULT_TOP), 1);

        let extensions = config.extensions.as_ref().map_or_else(
            || DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            |exts| exts.iter().filter_map(|e| normalize_extension(e)).collect(),
        );

        let ignore_dirs = DEFAULT_IGNORE_DIRS
            .iter()
            .map(ToString::to_string)
            .chain(
                config
                    .ignore_dirs
                    .iter()
                    .map(|dir| dir.trim().to_string())
                    .filter(|dir| !dir.is_empty()),
            )
            .collect();

        let roots = if config.roots.is_empty() {
            resolve_roots(&[PathBuf::from(".")], cwd)
        } else {
            resolve_roots(&config.roots, cwd)
        };

        let relative_to = config
            .relative_to
            .as_deref()
            .map_or_else(|| resolve_path(Path::new("."), cwd), |base| resolve_path(base, cwd));

        Self {
            min_lines,
            top,
            extensions,
            ignore_dirs,
            roots,
            relative_to,
            format: config.format.unwrap_or_default(),
        }
    }

    /// Reject options that cannot produce a sensible report.
    ///
    /// # Errors
    /// Returns a configuration error if `relative_to` names an existing
    /// path that is not a directory.
    pub fn validate(&self) -> Result<()> {
        if self.relative_to.exists() && !self.relative_to.is_dir() {
            return Err(LocScoutError::Config(format!(
                "relative_to is not a directory: {}",
                self.relative_to.display()
            )));
        }
        Ok(())
    }
}

fn clamp_to_usize(value: i64, floor: usize) -> usize {
    usize::try_from(value).map_or(
        if value < 0 { floor } else { usize::MAX },
        |v| v.max(floor),
    )
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
