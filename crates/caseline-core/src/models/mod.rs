pub mod client;
pub mod document;
pub mod insurance;
pub mod raw;

pub use client::ClientRecord;
pub use document::Document;
pub use insurance::{Authorization, Insurance};
pub use raw::{RawAuthorization, RawClientRecord, RawDocument, RawInsurance};
