use std::fmt::Write;

use crate::error::Result;

use super::{OutputFormatter, ScanReport};

/// Plain text: `<lines>\t<path>` per file, or a single notice when empty.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ScanReport<'_>) -> Result<String> {
        if report.files.is_empty() {
            return Ok(format!(
                "No files with >= {} lines found.\n",
                report.options.min_lines
            ));
        }

        let mut output = String::new();
        for file in report.files {
            writeln!(output, "{}\t{}", file.line_count, file.path)?;
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
