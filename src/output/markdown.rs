use std::fmt::Write;

use crate::error::Result;

use super::{OutputFormatter, ScanReport};

/// Markdown report: a heading naming the threshold, then one bullet per file.
pub struct MarkdownFormatter;

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, report: &ScanReport<'_>) -> Result<String> {
        let mut output = String::new();

        writeln!(
            output,
            "### Files with >= {} lines\n",
            report.options.min_lines
        )?;

        if report.files.is_empty() {
            writeln!(output, "- (none)")?;
            return Ok(output);
        }

        for file in report.files {
            writeln!(output, "- `{}` ({} lines)", file.path, file.line_count)?;
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
