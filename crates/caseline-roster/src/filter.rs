//! List filter predicates.
//!
//! A record matches the text query if any of its top-level scalar (string or
//! number) field values contains it case-insensitively; collection rows do
//! not participate. Status and archived are exact matches. The three
//! predicates AND together and the input order is preserved.

use serde_json::Value;

use caseline_core::models::ClientRecord;

/// Status filter wildcard: matches every status.
pub const ALL_STATUSES: &str = "all";

/// The three dashboard list controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFilter {
    /// Case-insensitive substring; empty matches everything.
    pub query: String,
    /// Exact `client_status` value, or [`ALL_STATUSES`].
    pub status: String,
    /// Strict boolean match against `archived`; never tri-state.
    pub archived: bool,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            status: ALL_STATUSES.to_string(),
            archived: false,
        }
    }
}

/// Does one top-level field value contain the lowercased needle? Only
/// scalars count; arrays (the collection rows) and booleans do not.
fn scalar_contains(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(s) => s.to_lowercase().contains(needle),
        Value::Number(n) => n.to_string().contains(needle),
        _ => false,
    }
}

fn matches_query(record: &ClientRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let Ok(Value::Object(fields)) = serde_json::to_value(record) else {
        return false;
    };
    let needle = query.to_lowercase();
    fields.values().any(|value| scalar_contains(value, &needle))
}

fn matches(record: &ClientRecord, filter: &ListFilter) -> bool {
    (filter.status == ALL_STATUSES || record.client_status == filter.status)
        && record.archived == filter.archived
        && matches_query(record, &filter.query)
}

/// Filter a record list for display. Stable: output preserves input order.
pub fn filter<'a>(records: &'a [ClientRecord], filter: &ListFilter) -> Vec<&'a ClientRecord> {
    records.iter().filter(|r| matches(r, filter)).collect()
}
