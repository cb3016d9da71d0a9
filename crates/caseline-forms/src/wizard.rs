//! Wizard state over the draft: section pointer, gated progression, and
//! submission assembly.

use tracing::{debug, info};

use caseline_core::models::ClientRecord;

use crate::draft::ClientRecordDraft;
use crate::error::FormError;
use crate::payload::clean_for_submit;
use crate::rules::{ValidationMessage, validate_all, validate_section};
use crate::section::Section;

/// Result of asking the wizard to move forward one section.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Current section validated clean; now on the returned section.
    Moved(Section),
    /// Current section has problems; navigation stays put.
    Blocked(Vec<ValidationMessage>),
    /// Already on the last section and it validated clean — submit next.
    ReadyToSubmit,
}

/// Result of asking the wizard to submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    /// Whole-form validation failed; the wizard has focused the first
    /// offending section.
    Invalid(Vec<ValidationMessage>),
    /// Cleaned payload, ready for the upsert collaborator. The wizard is now
    /// in-flight until the outcome is reported back.
    Ready(ClientRecord),
}

/// One open intake form: an owned draft, the current tab, and the
/// at-most-one-in-flight submission latch.
#[derive(Debug, Clone, PartialEq)]
pub struct FormWizard {
    draft: ClientRecordDraft,
    section: Section,
    in_flight: bool,
}

impl FormWizard {
    /// "Add client" form: empty draft, first tab.
    pub fn new() -> Self {
        Self {
            draft: ClientRecordDraft::new(),
            section: Section::Personal,
            in_flight: false,
        }
    }

    /// "Edit client" form over an existing record.
    pub fn for_record(record: &ClientRecord) -> Self {
        Self {
            draft: ClientRecordDraft::from_record(record),
            section: Section::Personal,
            in_flight: false,
        }
    }

    pub fn current_section(&self) -> Section {
        self.section
    }

    pub fn draft(&self) -> &ClientRecordDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ClientRecordDraft {
        &mut self.draft
    }

    pub fn submission_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Validate the current section and move forward if it is clean.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let messages = validate_section(self.section, &self.draft.record);
        if !messages.is_empty() {
            debug!(section = ?self.section, count = messages.len(), "advance blocked");
            return AdvanceOutcome::Blocked(messages);
        }
        match self.section.next() {
            Some(next) => {
                self.section = next;
                AdvanceOutcome::Moved(next)
            }
            None => AdvanceOutcome::ReadyToSubmit,
        }
    }

    /// Move back one section. Never validates — backing out is always free.
    pub fn retreat(&mut self) -> Option<Section> {
        let prev = self.section.prev()?;
        self.section = prev;
        Some(prev)
    }

    /// Validate the whole form and, if clean, produce the cleaned payload.
    ///
    /// On validation failure the wizard focuses the first offending section
    /// and stays submittable. On success it latches in-flight; the caller
    /// must report the collaborator's outcome via [`Self::submission_ok`] or
    /// [`Self::submission_failed`] before submitting again.
    pub fn submit(&mut self) -> Result<SubmitAction, FormError> {
        if self.in_flight {
            return Err(FormError::SubmissionInFlight);
        }

        let outcome = validate_all(&self.draft.record);
        if !outcome.is_valid() {
            if let Some(focus) = outcome.first_invalid_section {
                self.section = focus;
            }
            debug!(count = outcome.messages.len(), "submission rejected by validation");
            return Ok(SubmitAction::Invalid(outcome.messages));
        }

        let payload = clean_for_submit(&self.draft.record);
        self.in_flight = true;
        info!(client_id = %payload.id, "submission payload assembled");
        Ok(SubmitAction::Ready(payload))
    }

    /// The collaborator accepted the submission.
    pub fn submission_ok(&mut self) {
        self.in_flight = false;
    }

    /// The collaborator rejected the submission or the request failed. The
    /// draft is untouched so the user can retry without re-entering data.
    pub fn submission_failed(&mut self) {
        self.in_flight = false;
    }
}

impl Default for FormWizard {
    fn default() -> Self {
        Self::new()
    }
}
