mod json;
mod markdown;
pub mod path;
mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::checker::FileRecord;
use crate::config::ScanOptions;
use crate::error::Result;

/// Everything a formatter needs: the effective options and the ranked files.
#[derive(Debug, Clone, Copy)]
pub struct ScanReport<'a> {
    pub options: &'a ScanOptions,
    pub files: &'a [FileRecord],
}

impl<'a> ScanReport<'a> {
    #[must_use]
    pub const fn new(options: &'a ScanOptions, files: &'a [FileRecord]) -> Self {
        Self { options, files }
    }
}

/// Trait for rendering a scan report into an output format.
pub trait OutputFormatter {
    /// Render the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &ScanReport<'_>) -> Result<String>;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `<lines>\t<path>` line per file
    #[default]
    Text,
    /// Pretty JSON with the effective configuration and the file list
    #[value(alias = "structured-data")]
    #[serde(alias = "structured-data")]
    Json,
    /// Markdown heading with one bullet per file
    #[value(aliases = ["report", "md"])]
    #[serde(alias = "report", alias = "md")]
    Markdown,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Markdown => Box::new(MarkdownFormatter),
        }
    }
}

#[cfg(test)]
mod test_fixtures;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
