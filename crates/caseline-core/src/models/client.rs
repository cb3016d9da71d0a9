use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::document::Document;
use super::insurance::{Authorization, Insurance};

/// Dropdown choice that opens a free-text override field ("Other").
pub const OTHER_CHOICE: &str = "Other";

/// Client status values shown in the dashboard status dropdown and filters.
pub mod client_status {
    pub const NEW: &str = "New";
    pub const ACTIVE: &str = "Active";
    pub const INACTIVE: &str = "Inactive";
    pub const BENEFITS_VERIFICATION: &str = "Benefits Verification";
    pub const PRIOR_AUTHORIZATION: &str = "Prior Authorization";
    pub const CLIENT_ASSESSMENT: &str = "Client Assessment";
    pub const PENDING_AUTHORIZATION: &str = "Pending Authorization";

    pub const ALL: [&str; 7] = [
        NEW,
        ACTIVE,
        INACTIVE,
        BENEFITS_VERIFICATION,
        PRIOR_AUTHORIZATION,
        CLIENT_ASSESSMENT,
        PENDING_AUTHORIZATION,
    ];
}

/// Appointment reminder delivery preference.
pub mod appointment_reminder {
    pub const TEXT: &str = "text";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const NONE: &str = "none";

    pub const ALL: [&str; 4] = [TEXT, EMAIL, PHONE, NONE];
}

/// Wait list flag values.
pub mod wait_list {
    pub const YES: &str = "Yes";
    pub const NO: &str = "No";
}

/// Canonical client record.
///
/// Every field is required and defaulted: enumerated and free-text fields
/// default to the empty string, `archived` is a strict boolean, and the three
/// collections are always real arrays. The backend convention keeps dates as
/// `YYYY-MM-DD` strings, so no field here carries a parsed date type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ClientRecord {
    // Identity
    pub id: String,
    pub client_id: String,
    /// 16-digit numeric display identifier.
    pub client_uuid: String,

    // Demographics
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    /// ISO date truncated to 10 chars (`YYYY-MM-DD`), or empty.
    pub date_of_birth: String,
    pub gender: String,
    pub preferred_language: String,

    // Status
    pub client_status: String,
    pub archived: bool,
    pub wait_list_status: String,

    // Contact
    pub phone: String,
    pub email: String,
    pub appointment_reminder: String,

    // Address
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    /// Free-text country, used when `country` is "Other".
    pub country_other: String,

    // Guardian
    pub parent_first_name: String,
    pub parent_last_name: String,
    pub relationship_to_insured: String,
    /// Free-text relationship, used when `relationship_to_insured` is "Other".
    pub relation_other: String,
    pub emergency_contact_name: String,
    pub emg_relationship: String,
    pub emg_phone: String,
    pub emg_email: String,

    // Collections
    pub insurances: Vec<Insurance>,
    pub authorizations: Vec<Authorization>,
    pub documents: Vec<Document>,

    // Notes
    pub client_notes: String,
    pub other_information: String,
}
