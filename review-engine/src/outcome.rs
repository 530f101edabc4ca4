//! Terminal states of the single and bulk workflows.

use chrono::{DateTime, Utc};
use review_store::ReviewRecord;
use uuid::Uuid;

/// Terminal state of one single-review invocation.
///
/// Only generation and store failures surface as errors; every variant here
/// is a successful outcome from the caller's perspective, including the
/// degraded ones.
#[derive(Debug, Clone)]
pub enum ReviewOutcome {
    /// The URL did not classify as a repository; a degraded record with the
    /// sentinel report text was persisted (owner/name unknown).
    SavedInvalid { record: ReviewRecord, note: String },

    /// A review for this URL already exists and no override was requested.
    /// No new record was created.
    AlreadyExists(ExistingReview),

    /// Upstream analysis failed; a degraded record was persisted with the
    /// owner/name that did parse.
    SavedAnalysisFailed { record: ReviewRecord, note: String },

    /// Full pipeline success.
    Completed { record: ReviewRecord },
}

impl ReviewOutcome {
    /// The persisted record, when this outcome created one.
    pub fn record(&self) -> Option<&ReviewRecord> {
        match self {
            ReviewOutcome::SavedInvalid { record, .. }
            | ReviewOutcome::SavedAnalysisFailed { record, .. }
            | ReviewOutcome::Completed { record } => Some(record),
            ReviewOutcome::AlreadyExists(_) => None,
        }
    }
}

/// Surface of a dedup hit: enough for the caller to find the earlier review.
#[derive(Debug, Clone)]
pub struct ExistingReview {
    pub id: Uuid,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

impl From<&ReviewRecord> for ExistingReview {
    fn from(record: &ReviewRecord) -> Self {
        Self {
            id: record.id,
            summary: record.summary.clone(),
            created_at: record.created_at,
        }
    }
}

/// Per-entry result of a bulk run.
///
/// `Saved` covers degraded records too (the batch should not lose an item
/// over an unreachable repository); a dedup hit is deliberately a `Failed`
/// here so the batch summary reflects it.
#[derive(Debug, Clone)]
pub enum ItemOutcome {
    Saved {
        source_url: String,
        id: Uuid,
        /// Present when the record is degraded (classification or analysis
        /// note), absent for a clean run.
        note: Option<String>,
    },
    Failed {
        source_url: String,
        reason: String,
    },
}

impl ItemOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, ItemOutcome::Saved { .. })
    }

    pub fn source_url(&self) -> &str {
        match self {
            ItemOutcome::Saved { source_url, .. } | ItemOutcome::Failed { source_url, .. } => {
                source_url
            }
        }
    }
}
