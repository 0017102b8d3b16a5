use std::path::Path;

/// Count lines in raw file content.
///
/// A line is terminated by a `\n` byte; a trailing run of bytes without a
/// terminator counts as one more line. Empty content has zero lines. No text
/// decoding happens here, so invalid UTF-8 and `\r\n` endings are counted the
/// same way as any other bytes.
#[must_use]
pub fn count_lines(content: &[u8]) -> usize {
    let Some(&last) = content.last() else {
        return 0;
    };

    let newlines = bytecount::count(content, b'\n');
    if last == b'\n' {
        newlines
    } else {
        newlines + 1
    }
}

/// Reads files and counts their lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineCounter;

impl LineCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Read the whole file and return its line count.
    ///
    /// The file handle is closed before this returns.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn count_file(&self, path: &Path) -> std::io::Result<usize> {
        let content = std::fs::read(path)?;
        Ok(count_lines(&content))
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
