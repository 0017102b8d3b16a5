use serde::Serialize;

/// A counted file, identified by its display path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: String,
    #[serde(rename = "lines")]
    pub line_count: usize,
}

impl FileRecord {
    #[must_use]
    pub fn new(path: impl Into<String>, line_count: usize) -> Self {
        Self {
            path: path.into(),
            line_count,
        }
    }
}
