//! Error taxonomy for the registration intake pipeline.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntakeError>;

/// Everything that can abort an intake request.
///
/// Handlers are the pipeline boundary: they log the variant server-side and
/// collapse all of them into one generic failure acknowledgment, so callers
/// never learn which step failed.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("invalid submission: {0}")]
    Validation(String),

    #[error("store write failed: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("media upload failed: {0}")]
    Upload(String),

    #[error("mail delivery failed: {0}")]
    Delivery(String),
}
