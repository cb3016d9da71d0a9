//! Per-section field validation.
//!
//! Validators are pure: a draft record in, a list of human-readable messages
//! out, ordered by field declaration order and then by row index. Blank
//! placeholder rows are not validated — they exist only so the UI always has
//! a row to render, and submission cleanup strips them anyway.

use serde::Serialize;
use ts_rs::TS;

use caseline_core::models::ClientRecord;
use caseline_core::models::client::OTHER_CHOICE;
use caseline_core::units::parse_units;

use crate::payload::{authorization_is_blank, document_is_blank, insurance_is_blank};
use crate::section::Section;

/// One violated rule, scoped to the section whose tab should light up.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ValidationMessage {
    pub section: Section,
    pub message: String,
}

/// Result of validating every section in tab order.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ValidationOutcome {
    pub messages: Vec<ValidationMessage>,
    /// First section in tab order with a message; where the UI should focus.
    pub first_invalid_section: Option<Section>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn push(out: &mut Vec<ValidationMessage>, section: Section, message: String) {
    out.push(ValidationMessage { section, message });
}

fn require(out: &mut Vec<ValidationMessage>, section: Section, value: &str, label: &str) {
    if blank(value) {
        push(out, section, format!("{label} is required"));
    }
}

/// Minimal shape check: one `@`, non-empty local part, dotted domain.
fn email_is_well_formed(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

fn validate_personal(record: &ClientRecord, out: &mut Vec<ValidationMessage>) {
    let s = Section::Personal;
    require(out, s, &record.first_name, "First Name");
    require(out, s, &record.last_name, "Last Name");
    require(out, s, &record.date_of_birth, "Date of Birth");
    require(out, s, &record.client_status, "Client Status");
}

fn validate_contact(record: &ClientRecord, out: &mut Vec<ValidationMessage>) {
    let s = Section::Contact;
    require(out, s, &record.phone, "Phone");
    require(out, s, &record.email, "Email");
    if !blank(&record.email) && !email_is_well_formed(record.email.trim()) {
        push(out, s, "Email is not a valid email address".to_string());
    }
    require(out, s, &record.appointment_reminder, "Appointment Reminder");
    require(out, s, &record.address_line1, "Address Line 1");
    require(out, s, &record.city, "City");
    require(out, s, &record.state, "State");
    require(out, s, &record.zip, "Zip");
    require(out, s, &record.country, "Country");
    if record.country.trim() == OTHER_CHOICE {
        require(out, s, &record.country_other, "Other Country");
    }
}

fn validate_guardian(record: &ClientRecord, out: &mut Vec<ValidationMessage>) {
    let s = Section::Guardian;
    require(out, s, &record.parent_first_name, "Parent First Name");
    require(out, s, &record.parent_last_name, "Parent Last Name");
    require(
        out,
        s,
        &record.relationship_to_insured,
        "Relationship to Insured",
    );
    if record.relationship_to_insured.trim() == OTHER_CHOICE {
        require(out, s, &record.relation_other, "Other Relationship");
    }
    require(
        out,
        s,
        &record.emergency_contact_name,
        "Emergency Contact Name",
    );
    require(out, s, &record.emg_relationship, "Emergency Relationship");
    require(out, s, &record.emg_phone, "Emergency Phone");
}

fn validate_insurance(record: &ClientRecord, out: &mut Vec<ValidationMessage>) {
    let s = Section::Insurance;

    for (i, row) in record.insurances.iter().enumerate() {
        if insurance_is_blank(row) {
            continue;
        }
        let n = i + 1;
        require(out, s, &row.insurance_type, &format!("Insurance {n}: Type"));
        require(out, s, &row.provider, &format!("Insurance {n}: Provider"));
        require(
            out,
            s,
            &row.treatment_type,
            &format!("Insurance {n}: Treatment Type"),
        );
        require(out, s, &row.id_number, &format!("Insurance {n}: ID Number"));
        require(
            out,
            s,
            &row.group_number,
            &format!("Insurance {n}: Group Number"),
        );
        require(
            out,
            s,
            &row.start_date,
            &format!("Insurance {n}: Start Date"),
        );
    }

    for (i, row) in record.authorizations.iter().enumerate() {
        if authorization_is_blank(row) {
            continue;
        }
        let n = i + 1;
        require(out, s, &row.number, &format!("Authorization {n}: Number"));
        require(
            out,
            s,
            &row.billing_code,
            &format!("Authorization {n}: Billing Code"),
        );
        if blank(&row.units_approved_per_15_min) {
            push(
                out,
                s,
                format!("Authorization {n}: Units Approved is required"),
            );
        } else if row
            .units_approved_per_15_min
            .trim()
            .parse::<f64>()
            .map(|v| v < 0.0)
            .unwrap_or(true)
        {
            push(
                out,
                s,
                format!("Authorization {n}: Units Approved must be a non-negative number"),
            );
        }
        require(
            out,
            s,
            &row.start_date,
            &format!("Authorization {n}: Start Date"),
        );
        require(out, s, &row.end_date, &format!("Authorization {n}: End Date"));
        require(
            out,
            s,
            &row.insurance_index,
            &format!("Authorization {n}: Insurance"),
        );
        require(out, s, &row.status, &format!("Authorization {n}: Status"));

        // Cross-field rule, independent of the required checks above.
        if parse_units(&row.units_serviced) > parse_units(&row.units_approved_per_15_min) {
            push(
                out,
                s,
                format!("Authorization {n}: Units Serviced cannot exceed Units Approved"),
            );
        }
    }
}

fn validate_documents(record: &ClientRecord, out: &mut Vec<ValidationMessage>) {
    let s = Section::Documents;
    for (i, row) in record.documents.iter().enumerate() {
        if document_is_blank(row) {
            continue;
        }
        let n = i + 1;
        require(out, s, &row.doc_type, &format!("Document {n}: Type"));
        require(out, s, &row.file_url, &format!("Document {n}: File"));
    }
}

/// Validate a single section of the draft.
pub fn validate_section(section: Section, record: &ClientRecord) -> Vec<ValidationMessage> {
    let mut out = Vec::new();
    match section {
        Section::Personal => validate_personal(record, &mut out),
        Section::Contact => validate_contact(record, &mut out),
        Section::Guardian => validate_guardian(record, &mut out),
        Section::Insurance => validate_insurance(record, &mut out),
        Section::Documents => validate_documents(record, &mut out),
        Section::Notes => {}
    }
    out
}

/// Validate every section in tab order and report where to focus first.
pub fn validate_all(record: &ClientRecord) -> ValidationOutcome {
    let mut messages = Vec::new();
    for section in Section::ORDER {
        messages.extend(validate_section(section, record));
    }
    let first_invalid_section = messages.first().map(|m| m.section);
    ValidationOutcome {
        messages,
        first_invalid_section,
    }
}
