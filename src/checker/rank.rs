use std::cmp::Ordering;

use super::FileRecord;

/// Orders records largest-first and keeps the top `limit`.
///
/// Equal line counts are ordered by path ascending so output does not depend
/// on filesystem enumeration order.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    limit: usize,
}

impl Ranker {
    /// `limit` is raised to 1 if zero is given.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            limit: if limit == 0 { 1 } else { limit },
        }
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn rank(&self, mut records: Vec<FileRecord>) -> Vec<FileRecord> {
        records.sort_by(compare);
        records.truncate(self.limit);
        records
    }
}

fn compare(a: &FileRecord, b: &FileRecord) -> Ordering {
    b.line_count
        .cmp(&a.line_count)
        .then_with(|| a.path.cmp(&b.path))
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
