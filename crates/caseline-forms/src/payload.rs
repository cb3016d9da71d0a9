//! Submission cleanup: what actually leaves the form.
//!
//! The draft keeps placeholder rows so the UI always has something to render;
//! none of that reaches the wire. Cleanup strips blank rows, resolves the
//! "Other" country override, and recomputes every balance from the submitted
//! unit values so a stale UI figure can never be persisted.

use caseline_core::models::client::OTHER_CHOICE;
use caseline_core::models::{Authorization, ClientRecord, Document, Insurance};
use caseline_core::units::compute_balance;

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// A placeholder insurance row: no user-entered content.
pub fn insurance_is_blank(row: &Insurance) -> bool {
    blank(&row.insurance_type)
        && blank(&row.provider)
        && blank(&row.treatment_type)
        && blank(&row.id_number)
        && blank(&row.group_number)
        && blank(&row.coinsurance)
        && blank(&row.deductible)
        && blank(&row.start_date)
        && blank(&row.end_date)
}

/// A placeholder authorization row. `balance_units` is derived and ignored:
/// recomputation writes it even when the user typed nothing.
pub fn authorization_is_blank(row: &Authorization) -> bool {
    blank(&row.number)
        && blank(&row.billing_code)
        && blank(&row.units_approved_per_15_min)
        && blank(&row.units_serviced)
        && blank(&row.start_date)
        && blank(&row.end_date)
        && blank(&row.insurance_index)
        && blank(&row.status)
}

/// A placeholder document row. `generated_id` is a synthetic list key and
/// does not count as content.
pub fn document_is_blank(row: &Document) -> bool {
    blank(&row.doc_type) && blank(&row.file_url)
}

/// Produce the cleaned record handed to the upsert endpoint.
pub fn clean_for_submit(record: &ClientRecord) -> ClientRecord {
    let mut cleaned = record.clone();

    cleaned.insurances.retain(|row| !insurance_is_blank(row));
    cleaned
        .authorizations
        .retain(|row| !authorization_is_blank(row));
    cleaned.documents.retain(|row| !document_is_blank(row));

    for auth in &mut cleaned.authorizations {
        auth.balance_units =
            compute_balance(&auth.units_approved_per_15_min, &auth.units_serviced);
    }

    if cleaned.country.trim() == OTHER_CHOICE {
        cleaned.country = cleaned.country_other.trim().to_string();
    }

    cleaned
}
