//! Locally generated identifiers.
//!
//! Neither identifier is security-sensitive: `document_key` is a UI list key
//! and `client_uuid` is a human-facing display number assigned at intake.

use uuid::Uuid;

/// Random v4 UUID string used as the list key for a document row.
///
/// Generated client-side, never assigned by the server, and safe to
/// regenerate — it carries no meaning beyond keeping rendered rows stable.
pub fn document_key() -> String {
    Uuid::new_v4().to_string()
}

/// 16-digit numeric display identifier for a new client record.
pub fn client_uuid() -> String {
    let n = Uuid::new_v4().as_u128() % 10_000_000_000_000_000;
    format!("{n:016}")
}
