use super::FileRecord;

/// Drops records below an inclusive minimum line count.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdSelector {
    min_lines: usize,
}

impl ThresholdSelector {
    #[must_use]
    pub const fn new(min_lines: usize) -> Self {
        Self { min_lines }
    }

    #[must_use]
    pub const fn min_lines(&self) -> usize {
        self.min_lines
    }

    #[must_use]
    pub const fn is_selected(&self, record: &FileRecord) -> bool {
        record.line_count >= self.min_lines
    }

    pub fn select<I>(&self, records: I) -> impl Iterator<Item = FileRecord>
    where
        I: IntoIterator<Item = FileRecord>,
    {
        let selector = *self;
        records
            .into_iter()
            .filter(move |record| selector.is_selected(record))
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
