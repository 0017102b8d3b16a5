use std::path::PathBuf;

use crate::checker::FileRecord;
use crate::config::{DEFAULT_IGNORE_DIRS, ScanOptions};
use crate::scanner::ResolvedRoot;

use super::OutputFormat;

pub fn options(min_lines: usize, top: usize) -> ScanOptions {
    ScanOptions {
        min_lines,
        top,
        extensions: ["ts", "tsx"].iter().map(ToString::to_string).collect(),
        ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(ToString::to_string).collect(),
        roots: vec![ResolvedRoot {
            path: PathBuf::from("/repo"),
            is_file: false,
        }],
        relative_to: PathBuf::from("/repo"),
        format: OutputFormat::Text,
    }
}

pub fn files(entries: &[(&str, usize)]) -> Vec<FileRecord> {
    entries
        .iter()
        .map(|(path, lines)| FileRecord::new(*path, *lines))
        .collect()
}
