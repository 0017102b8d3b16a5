use std::path::Path;

use indexmap::IndexSet;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Normalize a user-supplied extension: trim, drop one leading dot, lowercase.
///
/// Returns `None` when nothing is left, so an empty entry can never match an
/// extensionless file.
#[must_use]
pub fn normalize_extension(ext: &str) -> Option<String> {
    let trimmed = ext.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if bare.is_empty() {
        None
    } else {
        Some(bare.to_lowercase())
    }
}

/// Keeps paths whose extension is in an allow-set, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: IndexSet<String>,
}

impl ExtensionFilter {
    #[must_use]
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .filter_map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        Self { extensions }
    }

    #[must_use]
    pub const fn extensions(&self) -> &IndexSet<String> {
        &self.extensions
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .is_some_and(|ext| self.extensions.contains(&ext.to_lowercase()))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
