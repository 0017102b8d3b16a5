//! Path display utilities for consistent output formatting.

use std::path::Path;

/// Format a path for display relative to `base`.
///
/// - If `path` lies under `base`, returns the relative path.
/// - Otherwise returns `path` unchanged (it is expected to be absolute).
/// - Separators are normalized to forward slashes.
/// - Returns `"."` when `path` equals `base`.
#[must_use]
pub fn display_path(path: &Path, base: &Path) -> String {
    let shown = path.strip_prefix(base).unwrap_or(path);
    let result = normalize_separators(&shown.to_string_lossy());

    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn path_under_base_is_relative() {
        let path = PathBuf::from("/repo/src/app.ts");
        assert_eq!(display_path(&path, Path::new("/repo")), "src/app.ts");
    }

    #[test]
    fn path_outside_base_stays_absolute() {
        let path = PathBuf::from("/other/app.ts");
        assert_eq!(display_path(&path, Path::new("/repo")), "/other/app.ts");
    }

    #[test]
    fn sibling_with_common_prefix_is_not_relative() {
        let path = PathBuf::from("/repo-two/app.ts");
        assert_eq!(display_path(&path, Path::new("/repo")), "/repo-two/app.ts");
    }

    #[test]
    fn path_equal_to_base_is_dot() {
        assert_eq!(display_path(Path::new("/repo"), Path::new("/repo")), ".");
    }

    #[test]
    fn backslashes_are_normalized() {
        assert_eq!(normalize_separators("src\\ui\\view.tsx"), "src/ui/view.tsx");
    }
}
