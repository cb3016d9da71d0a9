use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("record decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}
