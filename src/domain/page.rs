//! Page - One Page of Catalogue Results

use serde::{Deserialize, Serialize};

use super::character::Character;

/// Records of one page plus whether a further page exists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Records in the order the source returned them
    pub records: Vec<Character>,
    /// Whether the source has a page after this one
    pub has_next: bool,
}

impl PageResult {
    pub fn new(records: Vec<Character>, has_next: bool) -> Self {
        Self { records, has_next }
    }

    /// Number of records on the page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
