use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A client record as the PHP API actually returns it.
///
/// Every field is optional, accepts both camelCase and snake_case keys, and
/// is typed [`Value`] because the backend mixes numbers with numeric strings
/// and `0`/`1` with booleans. The intake normalizer is the only consumer;
/// nothing downstream of it ever sees this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawClientRecord {
    pub id: Option<Value>,
    #[serde(alias = "client_id")]
    pub client_id: Option<Value>,
    #[serde(alias = "client_uuid")]
    pub client_uuid: Option<Value>,

    #[serde(alias = "first_name")]
    pub first_name: Option<Value>,
    #[serde(alias = "middle_name")]
    pub middle_name: Option<Value>,
    #[serde(alias = "last_name")]
    pub last_name: Option<Value>,
    #[serde(alias = "date_of_birth", alias = "dob")]
    pub date_of_birth: Option<Value>,
    pub gender: Option<Value>,
    #[serde(alias = "preferred_language")]
    pub preferred_language: Option<Value>,

    #[serde(alias = "client_status", alias = "status")]
    pub client_status: Option<Value>,
    pub archived: Option<Value>,
    #[serde(alias = "wait_list_status", alias = "waitlist_status")]
    pub wait_list_status: Option<Value>,

    pub phone: Option<Value>,
    pub email: Option<Value>,
    #[serde(alias = "appointment_reminder")]
    pub appointment_reminder: Option<Value>,

    #[serde(alias = "address_line1", alias = "address1")]
    pub address_line1: Option<Value>,
    #[serde(alias = "address_line2", alias = "address2")]
    pub address_line2: Option<Value>,
    pub city: Option<Value>,
    pub state: Option<Value>,
    #[serde(alias = "zip_code", alias = "zipcode")]
    pub zip: Option<Value>,
    pub country: Option<Value>,
    #[serde(alias = "country_other")]
    pub country_other: Option<Value>,

    #[serde(alias = "parent_first_name")]
    pub parent_first_name: Option<Value>,
    #[serde(alias = "parent_last_name")]
    pub parent_last_name: Option<Value>,
    #[serde(alias = "relationship_to_insured")]
    pub relationship_to_insured: Option<Value>,
    #[serde(alias = "relation_other")]
    pub relation_other: Option<Value>,
    #[serde(alias = "emergency_contact_name")]
    pub emergency_contact_name: Option<Value>,
    #[serde(alias = "emg_relationship")]
    pub emg_relationship: Option<Value>,
    #[serde(alias = "emg_phone")]
    pub emg_phone: Option<Value>,
    #[serde(alias = "emg_email")]
    pub emg_email: Option<Value>,

    /// Any non-array value here (null, scalar, missing) normalizes to `[]`.
    pub insurances: Option<Value>,
    pub authorizations: Option<Value>,
    pub documents: Option<Value>,

    #[serde(alias = "client_notes", alias = "notes")]
    pub client_notes: Option<Value>,
    #[serde(alias = "other_information")]
    pub other_information: Option<Value>,
}

/// Insurance row as returned by the API. `id` is the server-side row id that
/// authorizations reference via `insurance_id` before intake rewrites the
/// link to a positional index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInsurance {
    pub id: Option<Value>,
    #[serde(rename = "type", alias = "insurance_type")]
    pub insurance_type: Option<Value>,
    pub provider: Option<Value>,
    #[serde(alias = "treatment_type")]
    pub treatment_type: Option<Value>,
    #[serde(alias = "id_number")]
    pub id_number: Option<Value>,
    #[serde(alias = "group_number")]
    pub group_number: Option<Value>,
    pub coinsurance: Option<Value>,
    pub deductible: Option<Value>,
    #[serde(alias = "start_date")]
    pub start_date: Option<Value>,
    #[serde(alias = "end_date")]
    pub end_date: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAuthorization {
    pub number: Option<Value>,
    #[serde(alias = "billing_code")]
    pub billing_code: Option<Value>,
    #[serde(alias = "units_approved_per_15_min", alias = "unitsApproved")]
    pub units_approved_per_15_min: Option<Value>,
    #[serde(alias = "units_serviced")]
    pub units_serviced: Option<Value>,
    #[serde(alias = "balance_units")]
    pub balance_units: Option<Value>,
    #[serde(alias = "start_date")]
    pub start_date: Option<Value>,
    #[serde(alias = "end_date")]
    pub end_date: Option<Value>,
    /// Server-side foreign key to an insurance row's `id`. Rewritten by
    /// intake into `insurance_index`; absent on already-normalized input.
    #[serde(alias = "insurance_id")]
    pub insurance_id: Option<Value>,
    #[serde(alias = "insurance_index")]
    pub insurance_index: Option<Value>,
    pub status: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDocument {
    #[serde(rename = "type", alias = "doc_type")]
    pub doc_type: Option<Value>,
    #[serde(alias = "file_url", alias = "fileURL")]
    pub file_url: Option<Value>,
    #[serde(alias = "generated_id")]
    pub generated_id: Option<Value>,
}
