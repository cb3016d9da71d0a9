use tracing::info;

use caseline_core::models::ClientRecord;

use crate::filter::{ListFilter, filter};

/// Process-wide cache of the normalized client collection.
///
/// Refreshed wholesale after each successful fetch — replace, never merge.
/// There is exactly one writer (the fetch path); readers get filtered views.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<ClientRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a freshly fetched one.
    pub fn replace(&mut self, records: Vec<ClientRecord>) {
        info!(count = records.len(), "client roster replaced");
        self.records = records;
    }

    pub fn records(&self) -> &[ClientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filtered view for the dashboard list, in stored order.
    pub fn view(&self, list_filter: &ListFilter) -> Vec<&ClientRecord> {
        filter(&self.records, list_filter)
    }

    /// Look a record up by its canonical id (used when opening the edit form).
    pub fn find(&self, id: &str) -> Option<&ClientRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}
