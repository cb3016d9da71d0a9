//! caseline-forms
//!
//! Multi-section intake form state: per-section validation, draft row
//! operations with cascade rules, and the wizard that gates progression and
//! assembles the cleaned submission payload. No rendering concern lives
//! here — everything is plain data in, plain data out.

pub mod draft;
pub mod error;
pub mod payload;
pub mod rules;
pub mod section;
pub mod wizard;

pub use draft::ClientRecordDraft;
pub use error::FormError;
pub use payload::clean_for_submit;
pub use rules::{ValidationMessage, ValidationOutcome, validate_all, validate_section};
pub use section::Section;
pub use wizard::{AdvanceOutcome, FormWizard, SubmitAction};
