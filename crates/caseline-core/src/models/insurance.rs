use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Insurance plan role within a client record.
pub mod insurance_type {
    pub const PRIMARY: &str = "Primary";
    pub const SECONDARY: &str = "Secondary";

    pub const ALL: [&str; 2] = [PRIMARY, SECONDARY];
}

/// Authorization lifecycle status.
pub mod authorization_status {
    pub const ACTIVE: &str = "Active";
    pub const INACTIVE: &str = "Inactive";
    pub const EXPIRED: &str = "Expired";

    pub const ALL: [&str; 3] = [ACTIVE, INACTIVE, EXPIRED];
}

/// One insurance plan row on a client record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Insurance {
    #[serde(rename = "type")]
    pub insurance_type: String,
    pub provider: String,
    pub treatment_type: String,
    pub id_number: String,
    pub group_number: String,
    pub coinsurance: String,
    pub deductible: String,
    pub start_date: String,
    pub end_date: String,
}

/// One service authorization row on a client record.
///
/// `insurance_index` joins the row to its plan by *position* in the record's
/// `insurances` list, stored as a string ("0", "1", ...) or empty when
/// unlinked. The backend depends on this positional convention, so it is
/// preserved as-is; a stable per-row id would be the sturdier design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Authorization {
    pub number: String,
    pub billing_code: String,
    /// Approved units, 15-minute increments. Free-text field, parsed on use.
    pub units_approved_per_15_min: String,
    pub units_serviced: String,
    /// Derived: approved minus serviced. Recomputed, never authoritative.
    pub balance_units: String,
    pub start_date: String,
    pub end_date: String,
    pub insurance_index: String,
    pub status: String,
}
