//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JuryError {
    /// A case already exists for the target day key
    #[error("CASE/DUPLICATE: {0}")]
    DuplicateCase(String),

    /// The author already has a verdict on this case
    #[error("VERDICT/DUPLICATE: {0}")]
    DuplicateSubmission(String),

    /// Verdict text failed validation before any write
    #[error("VERDICT/INVALID: {0}")]
    InvalidVerdict(String),

    /// Vote target does not exist
    #[error("VERDICT/NOT_FOUND: {0}")]
    NotFound(String),

    /// Authoring collaborator failed or returned unusable data
    #[error("AUTHORING/UNAVAILABLE: {0}")]
    AuthoringUnavailable(String),

    /// Storage collaborator failure; not retried
    #[error("STORE/IO: {0}")]
    TransientIo(String),

    #[error("STORE/SERIALIZE: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Unified Result alias
pub type Result<T> = std::result::Result<T, JuryError>;
