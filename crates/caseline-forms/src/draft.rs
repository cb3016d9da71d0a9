//! The in-memory form draft.
//!
//! One draft per open form instance, single writer, discarded on cancel.
//! The three row collections always hold at least one row while editing, so
//! the UI never renders an empty list; blank placeholders never survive
//! submission cleanup.

use caseline_core::ids;
use caseline_core::models::{Authorization, ClientRecord, Document, Insurance};
use caseline_core::units::compute_balance;

/// Mutable draft of a client record. Same shape as the canonical record;
/// values may be partial or invalid until submission validates them.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRecordDraft {
    pub record: ClientRecord,
}

fn placeholder_document() -> Document {
    Document {
        generated_id: ids::document_key(),
        ..Document::default()
    }
}

impl ClientRecordDraft {
    /// Fresh draft for the "add client" form: everything empty except the
    /// generated display identifier and one placeholder row per collection.
    pub fn new() -> Self {
        let record = ClientRecord {
            client_uuid: ids::client_uuid(),
            insurances: vec![Insurance::default()],
            authorizations: vec![Authorization::default()],
            documents: vec![placeholder_document()],
            ..ClientRecord::default()
        };
        Self { record }
    }

    /// Draft for the "edit client" form. Empty collections are backfilled
    /// with one placeholder row, and server documents missing a local list
    /// key get one assigned.
    pub fn from_record(record: &ClientRecord) -> Self {
        let mut record = record.clone();
        if record.insurances.is_empty() {
            record.insurances.push(Insurance::default());
        }
        if record.authorizations.is_empty() {
            record.authorizations.push(Authorization::default());
        }
        if record.documents.is_empty() {
            record.documents.push(placeholder_document());
        } else {
            for doc in &mut record.documents {
                if doc.generated_id.trim().is_empty() {
                    doc.generated_id = ids::document_key();
                }
            }
        }
        Self { record }
    }

    pub fn add_insurance(&mut self) {
        self.record.insurances.push(Insurance::default());
    }

    /// Remove an insurance row and every authorization linked to it.
    ///
    /// Links are positional, so authorizations whose `insurance_index`
    /// equals the removed position go with it. Surviving links are left
    /// untouched — the positional convention is the backend's contract and
    /// is deliberately not re-indexed here.
    pub fn remove_insurance(&mut self, index: usize) {
        if index >= self.record.insurances.len() {
            return;
        }
        self.record.insurances.remove(index);
        let removed = index.to_string();
        self.record
            .authorizations
            .retain(|auth| auth.insurance_index != removed);

        if self.record.insurances.is_empty() {
            self.record.insurances.push(Insurance::default());
        }
        if self.record.authorizations.is_empty() {
            self.record.authorizations.push(Authorization::default());
        }
    }

    pub fn add_authorization(&mut self) {
        self.record.authorizations.push(Authorization::default());
    }

    pub fn remove_authorization(&mut self, index: usize) {
        if index >= self.record.authorizations.len() {
            return;
        }
        self.record.authorizations.remove(index);
        if self.record.authorizations.is_empty() {
            self.record.authorizations.push(Authorization::default());
        }
    }

    pub fn add_document(&mut self) {
        self.record.documents.push(placeholder_document());
    }

    pub fn remove_document(&mut self, index: usize) {
        if index >= self.record.documents.len() {
            return;
        }
        self.record.documents.remove(index);
        if self.record.documents.is_empty() {
            self.record.documents.push(placeholder_document());
        }
    }

    /// Write one authorization's unit fields and recompute its balance in
    /// the same step, so the derived value can never lag an edit.
    pub fn set_authorization_units(&mut self, index: usize, approved: &str, serviced: &str) {
        if let Some(auth) = self.record.authorizations.get_mut(index) {
            auth.units_approved_per_15_min = approved.to_string();
            auth.units_serviced = serviced.to_string();
            auth.balance_units = compute_balance(approved, serviced);
        }
    }
}

impl Default for ClientRecordDraft {
    fn default() -> Self {
        Self::new()
    }
}
