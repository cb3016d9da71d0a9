//! caseline-intake
//!
//! Record normalization: reshapes the heterogeneous payloads the PHP API
//! returns into canonical [`ClientRecord`]s. Pure transforms, skip/report on
//! malformed input — a corrupt record never reaches the dashboard collection.
//!
//! [`ClientRecord`]: caseline_core::models::ClientRecord

pub mod error;
pub mod normalize;

pub use error::NormalizeError;
pub use normalize::{SkippedRecord, normalize, normalize_all, normalize_value};
