//! Wire shapes for the practice-management HTTP API.
//!
//! The API is the system of record; these types only describe its envelope.
//! Requests and responses are JSON, success is flagged in-band, and the
//! upsert endpoint wants `archived` as `0`/`1` rather than a boolean.

use serde::Deserialize;

use crate::error::CoreError;
use crate::models::ClientRecord;

/// Response envelope for the fetch-all-clients endpoint.
///
/// Client rows stay untyped here: one malformed row is skipped at intake
/// rather than failing the whole fetch at decode time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchAllResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub clients: Vec<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response envelope for the client upsert endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Serialize a cleaned record as the upsert request body.
///
/// Identical to the record's own JSON shape except `archived`, which the
/// endpoint expects as `0`/`1`.
pub fn upsert_body(record: &ClientRecord) -> Result<serde_json::Value, CoreError> {
    let mut body = serde_json::to_value(record)?;
    let obj = body.as_object_mut().ok_or(CoreError::NotAnObject)?;
    obj.insert(
        "archived".to_string(),
        serde_json::Value::from(if record.archived { 1 } else { 0 }),
    );
    Ok(body)
}
