use indexmap::IndexSet;
use serde::Serialize;

use crate::checker::FileRecord;
use crate::error::Result;

use super::path::normalize_separators;
use super::{OutputFormatter, ScanReport};

pub struct JsonFormatter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    min_lines: usize,
    top: usize,
    extensions: &'a IndexSet<String>,
    ignore_dirs: &'a IndexSet<String>,
    roots: Vec<String>,
    files: &'a [FileRecord],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport<'_>) -> Result<String> {
        let options = report.options;
        let output = JsonOutput {
            min_lines: options.min_lines,
            top: options.top,
            extensions: &options.extensions,
            ignore_dirs: &options.ignore_dirs,
            roots: options
                .roots
                .iter()
                .map(|root| normalize_separators(&root.path.to_string_lossy()))
                .collect(),
            files: report.files,
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
