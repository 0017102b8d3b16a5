use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

pub const DEFAULT_MIN_LINES: i64 = 1000;
pub const DEFAULT_TOP: i64 = 30;
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Directory names that are always pruned. User-supplied names are added to
/// these, never substituted for them.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "dist",
    "build",
    "coverage",
    "target",
    ".next",
    ".turbo",
    ".cache",
];

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

/// `[scan]` table. Every key is optional; unset keys fall back to built-in
/// defaults when options are resolved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Roots to scan when none are given on the command line.
    pub roots: Vec<PathBuf>,

    /// Inclusive line threshold. Negative values are clamped to 0.
    pub min_lines: Option<i64>,

    /// Maximum number of results. Values below 1 are clamped to 1.
    pub top: Option<i64>,

    /// Allowed extensions. Replaces the defaults when set.
    pub extensions: Option<Vec<String>>,

    /// Extra directory names to prune, merged with [`DEFAULT_IGNORE_DIRS`].
    pub ignore_dirs: Vec<String>,

    /// Base directory for display paths.
    pub relative_to: Option<PathBuf>,

    pub format: Option<OutputFormat>,
}

impl ScanConfig {
    /// Make relative `roots` and `relative_to` absolute against `base`,
    /// normally the directory of the config file they were read from.
    pub fn rebase_paths(&mut self, base: &Path) {
        for root in &mut self.roots {
            if root.is_relative() {
                *root = base.join(&*root);
            }
        }

        if let Some(relative_to) = self.relative_to.as_mut().filter(|p| p.is_relative()) {
            *relative_to = base.join(&*relative_to);
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
