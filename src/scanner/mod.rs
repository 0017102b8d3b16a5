mod filter;
mod resolve;
mod walker;

pub use filter::{ExtensionFilter, FileFilter, normalize_extension};
pub use resolve::{ResolvedRoot, resolve_path, resolve_roots};
pub use walker::Walker;
