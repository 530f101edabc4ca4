//! Engine-level errors.
//!
//! Deliberately small: classification misses and upstream fetch failures are
//! recovered into degraded records inside the workflow and never reach this
//! type. What remains is caller input validation plus the two hard-failure
//! stages (generation, persistence-adjacent store errors).

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed caller input (bulk size cap, duplicate URLs).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The text-completion backend failed; no partial record is saved.
    #[error("report generation failed: {0}")]
    Generation(#[from] ai_report_service::AiServiceError),

    /// Store read/write failure.
    #[error("store operation failed: {0}")]
    Store(#[from] review_store::StoreError),
}
