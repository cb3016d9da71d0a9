//! caseline-api
//!
//! Typed client for the practice-management PHP API. The API is the system
//! of record; this crate only shapes requests and responses — no retries, no
//! queueing, no local persistence.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::{ApiClient, FetchOutcome};
pub use config::ApiConfig;
pub use error::ApiError;
