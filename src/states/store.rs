//! Record Store
//!
//! Holds the records accumulated since the last mode switch. Only the fetch
//! coordinator mutates it.

use crate::domain::Character;

/// Accumulated catalogue records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Character>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    /// All records in accumulation order
    pub fn records(&self) -> &[Character] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ==================== Mutation ====================

    /// Replace the contents with one page
    pub(crate) fn replace(&mut self, records: Vec<Character>) {
        self.records = records;
    }

    /// Append one page, keeping arrival order
    ///
    /// Identifiers already present are not filtered out.
    pub(crate) fn append(&mut self, records: Vec<Character>) {
        self.records.extend(records);
    }

    /// Drop everything
    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}
