//! Root resolution: turns user-supplied roots into absolute paths.

use std::path::{Component, Path, PathBuf};

/// A root after resolution against the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoot {
    /// Absolute path of the root.
    pub path: PathBuf,
    /// `true` when the root is a plain file rather than a directory.
    pub is_file: bool,
}

impl ResolvedRoot {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let is_file = path.is_file();
        Self { path, is_file }
    }

    /// Whether the root exists at all. Missing roots walk to nothing.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Resolve a path against `cwd` into an absolute path.
///
/// Existing paths are canonicalized (without the `\\?\` prefix on Windows).
/// Paths that do not exist are joined and normalized lexically instead, so
/// resolution itself never fails.
#[must_use]
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    dunce::canonicalize(&joined).unwrap_or_else(|_| normalize_lexically(&joined))
}

/// Resolve every root, keeping input order. Duplicates are kept.
#[must_use]
pub fn resolve_roots(roots: &[PathBuf], cwd: &Path) -> Vec<ResolvedRoot> {
    roots
        .iter()
        .map(|root| ResolvedRoot::new(resolve_path(root, cwd)))
        .collect()
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
