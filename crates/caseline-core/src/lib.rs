//! caseline-core
//!
//! Pure domain types, wire shapes, and id/unit helpers.
//! No I/O dependency — this is the shared vocabulary of the Caseline system.

pub mod error;
pub mod ids;
pub mod models;
pub mod units;
pub mod wire;
