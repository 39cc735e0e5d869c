//! Paginated result types

use serde::Serialize;

use crate::extract::SpecRecord;

/// A record with its 1-based position in the result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedRecord {
    /// 1-based position
    pub position: usize,
    /// Number of records in the set
    pub total: usize,
    /// The record itself
    pub record: SpecRecord,
}

/// Ordered records for one query.
///
/// Positions run `1..=total` in the order the records were given, and
/// `total` always equals the number of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaginatedResultSet {
    entries: Vec<PagedRecord>,
}

impl PaginatedResultSet {
    /// Number the records in their given order
    pub fn from_records(records: Vec<SpecRecord>) -> Self {
        let total = records.len();
        let entries = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| PagedRecord {
                position: index + 1,
                total,
                record,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[PagedRecord] {
        &self.entries
    }

    pub fn records(&self) -> impl Iterator<Item = &SpecRecord> {
        self.entries.iter().map(|entry| &entry.record)
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exactly one record; callers typically skip paging controls
    pub fn is_single(&self) -> bool {
        self.entries.len() == 1
    }
}

impl IntoIterator for PaginatedResultSet {
    type Item = PagedRecord;
    type IntoIter = std::vec::IntoIter<PagedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
