use serde::Serialize;

use crate::record::Record;

/// The active set of student records, in upload order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    header: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(header: Vec<String>, records: Vec<Record>) -> Self {
        Self { header, records }
    }

    /// Column names in header order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// The first `count` records, used for previews.
    pub fn sample(&self, count: usize) -> &[Record] {
        &self.records[..count.min(self.records.len())]
    }
}
