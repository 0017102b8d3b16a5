use std::path::PathBuf;

use indexmap::IndexSet;
use walkdir::{DirEntry, WalkDir};

use super::ResolvedRoot;

/// Lazily enumerates candidate files under a set of resolved roots.
///
/// Directories whose base name is in the ignore-set are pruned before they
/// are read, so nothing below them is ever visited. Roots themselves are
/// never pruned, and a file root is yielded as-is.
///
/// Symbolic links to directories are not followed. A link to a regular file
/// is yielded as a file and later read through the link.
#[derive(Debug, Clone)]
pub struct Walker {
    roots: Vec<ResolvedRoot>,
    ignore_dirs: IndexSet<String>,
}

impl Walker {
    #[must_use]
    pub fn new<I, S>(roots: Vec<ResolvedRoot>, ignore_dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roots,
            ignore_dirs: ignore_dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Start a fresh traversal over every root, in root order.
    pub fn candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.roots.iter().flat_map(move |root| self.walk_root(root))
    }

    fn walk_root<'a>(&'a self, root: &'a ResolvedRoot) -> impl Iterator<Item = PathBuf> + 'a {
        let single = root.is_file.then(|| root.path.clone());
        let tree = (!root.is_file).then(|| {
            WalkDir::new(&root.path)
                .into_iter()
                .filter_entry(move |entry| !self.is_pruned(entry))
                .filter_map(std::result::Result::ok)
                .filter(is_file_or_file_link)
                .map(DirEntry::into_path)
        });

        single.into_iter().chain(tree.into_iter().flatten())
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.ignore_dirs.contains(name))
    }
}

fn is_file_or_file_link(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
