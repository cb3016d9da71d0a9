use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Document categories accepted at intake.
pub mod document_type {
    pub const INSURANCE_CARD: &str = "Insurance Card";
    pub const AUTHORIZATION_LETTER: &str = "Authorization Letter";
    pub const DIAGNOSIS_REPORT: &str = "Diagnosis Report";
    pub const INTAKE_FORM: &str = "Intake Form";
    pub const CONSENT_FORM: &str = "Consent Form";
    pub const OTHER: &str = "Other";

    pub const ALL: [&str; 6] = [
        INSURANCE_CARD,
        AUTHORIZATION_LETTER,
        DIAGNOSIS_REPORT,
        INTAKE_FORM,
        CONSENT_FORM,
        OTHER,
    ];
}

/// One uploaded document row on a client record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Document {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub file_url: String,
    /// Locally generated v4 UUID, UI list key only. See [`crate::ids`].
    pub generated_id: String,
}
