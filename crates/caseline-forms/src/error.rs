use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    /// A submission for this form instance has not settled yet. The UI keeps
    /// at most one in flight; retry once the outcome is reported.
    #[error("a submission is already in flight for this form")]
    SubmissionInFlight,
}
