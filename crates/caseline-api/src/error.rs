use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered but flagged the operation as failed. One
    /// user-visible message; the caller's draft state stays untouched.
    #[error("server rejected the request: {0}")]
    Server(String),

    #[error("payload encoding failed: {0}")]
    Encode(#[from] caseline_core::error::CoreError),
}
