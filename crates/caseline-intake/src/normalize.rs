//! Raw-to-canonical record transformation.
//!
//! The API mixes camelCase with snake_case, numbers with numeric strings,
//! and booleans with `0`/`1`. Everything funnels through the coercers here
//! so the rest of the workspace only ever sees [`ClientRecord`]'s shape.

use serde_json::Value;
use tracing::warn;

use caseline_core::models::{
    Authorization, ClientRecord, Document, Insurance, RawAuthorization, RawClientRecord,
    RawDocument, RawInsurance,
};
use caseline_core::units::compute_balance;

use crate::error::NormalizeError;

/// A raw record that could not be normalized, with the reason it was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

/// Coerce an optional scalar into its display string. Absent and null become
/// empty; numbers keep their JSON rendering ("7", "7.5").
fn text(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerce the backend's assorted truthy spellings into a strict bool.
fn flag(value: &Option<Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s == "1" || s.eq_ignore_ascii_case("true")
        }
        _ => false,
    }
}

/// Decode a collection field element-wise. Non-array sources become an empty
/// list; individual elements that are not objects are dropped with a warning
/// rather than poisoning the whole record.
fn rows<T: serde::de::DeserializeOwned>(value: &Option<Value>, field: &str) -> Vec<T> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item.clone()) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!(field, index = i, error = %e, "dropping undecodable row");
                None
            }
        })
        .collect()
}

fn normalize_insurance(raw: &RawInsurance) -> Insurance {
    Insurance {
        insurance_type: text(&raw.insurance_type),
        provider: text(&raw.provider),
        treatment_type: text(&raw.treatment_type),
        id_number: text(&raw.id_number),
        group_number: text(&raw.group_number),
        coinsurance: text(&raw.coinsurance),
        deductible: text(&raw.deductible),
        start_date: text(&raw.start_date),
        end_date: text(&raw.end_date),
    }
}

/// Resolve an authorization's insurance link to a positional index.
///
/// Fresh server rows carry `insurance_id`, a foreign key to an insurance
/// row's own id; the dashboard joins by list position instead, so the key is
/// rewritten to the matching position as a string, or empty when nothing
/// matches. Already-normalized input carries `insurance_index` directly and
/// passes through unchanged.
fn resolve_link(raw: &RawAuthorization, insurance_ids: &[String]) -> String {
    match &raw.insurance_id {
        Some(_) => {
            let fk = text(&raw.insurance_id);
            if fk.is_empty() {
                return String::new();
            }
            insurance_ids
                .iter()
                .position(|id| !id.is_empty() && *id == fk)
                .map(|i| i.to_string())
                .unwrap_or_default()
        }
        None => text(&raw.insurance_index),
    }
}

fn normalize_authorization(raw: &RawAuthorization, insurance_ids: &[String]) -> Authorization {
    let units_approved = text(&raw.units_approved_per_15_min);
    let units_serviced = text(&raw.units_serviced);
    let balance_units = compute_balance(&units_approved, &units_serviced);
    Authorization {
        number: text(&raw.number),
        billing_code: text(&raw.billing_code),
        units_approved_per_15_min: units_approved,
        units_serviced,
        balance_units,
        start_date: text(&raw.start_date),
        end_date: text(&raw.end_date),
        insurance_index: resolve_link(raw, insurance_ids),
        status: text(&raw.status),
    }
}

fn normalize_document(raw: &RawDocument) -> Document {
    Document {
        doc_type: text(&raw.doc_type),
        file_url: text(&raw.file_url),
        generated_id: text(&raw.generated_id),
    }
}

/// Normalize one raw record into the canonical shape.
///
/// Total: every declared field comes out populated, defaulting to empty
/// string / `false` / empty list. Identity prefers the server's `clientId`
/// and falls back to `id`; well-formed server rows always carry one of the
/// two.
pub fn normalize(raw: &RawClientRecord) -> ClientRecord {
    let client_id = text(&raw.client_id);
    let id = if client_id.is_empty() {
        text(&raw.id)
    } else {
        client_id
    };

    let raw_insurances: Vec<RawInsurance> = rows(&raw.insurances, "insurances");
    let insurance_ids: Vec<String> = raw_insurances.iter().map(|i| text(&i.id)).collect();
    let insurances = raw_insurances.iter().map(normalize_insurance).collect();

    let authorizations = rows::<RawAuthorization>(&raw.authorizations, "authorizations")
        .iter()
        .map(|a| normalize_authorization(a, &insurance_ids))
        .collect();

    let documents = rows::<RawDocument>(&raw.documents, "documents")
        .iter()
        .map(normalize_document)
        .collect();

    let date_of_birth: String = text(&raw.date_of_birth).chars().take(10).collect();

    ClientRecord {
        client_id: id.clone(),
        id,
        client_uuid: text(&raw.client_uuid),
        first_name: text(&raw.first_name),
        middle_name: text(&raw.middle_name),
        last_name: text(&raw.last_name),
        date_of_birth,
        gender: text(&raw.gender),
        preferred_language: text(&raw.preferred_language),
        client_status: text(&raw.client_status),
        archived: flag(&raw.archived),
        wait_list_status: text(&raw.wait_list_status),
        phone: text(&raw.phone),
        email: text(&raw.email),
        appointment_reminder: text(&raw.appointment_reminder),
        address_line1: text(&raw.address_line1),
        address_line2: text(&raw.address_line2),
        city: text(&raw.city),
        state: text(&raw.state),
        zip: text(&raw.zip),
        country: text(&raw.country),
        country_other: text(&raw.country_other),
        parent_first_name: text(&raw.parent_first_name),
        parent_last_name: text(&raw.parent_last_name),
        relationship_to_insured: text(&raw.relationship_to_insured),
        relation_other: text(&raw.relation_other),
        emergency_contact_name: text(&raw.emergency_contact_name),
        emg_relationship: text(&raw.emg_relationship),
        emg_phone: text(&raw.emg_phone),
        emg_email: text(&raw.emg_email),
        insurances,
        authorizations,
        documents,
        client_notes: text(&raw.client_notes),
        other_information: text(&raw.other_information),
    }
}

/// Normalize an untyped JSON value. Non-objects are rejected outright so the
/// caller can report the offending record instead of receiving a husk.
pub fn normalize_value(value: &Value) -> Result<ClientRecord, NormalizeError> {
    if !value.is_object() {
        return Err(NormalizeError::NotAnObject);
    }
    let raw: RawClientRecord = serde_json::from_value(value.clone())?;
    Ok(normalize(&raw))
}

/// Normalize a fetched batch with skip/report semantics: good records come
/// back in input order, bad ones are logged and returned as skips.
pub fn normalize_all(values: &[Value]) -> (Vec<ClientRecord>, Vec<SkippedRecord>) {
    let mut records = Vec::with_capacity(values.len());
    let mut skipped = Vec::new();
    for (index, value) in values.iter().enumerate() {
        match normalize_value(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed client record");
                skipped.push(SkippedRecord {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }
    (records, skipped)
}
