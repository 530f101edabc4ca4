//! Review orchestration pipeline.
//!
//! Single entry type [`Reviewer`], generic over the repository host and the
//! report generator so both can be faked in tests:
//!
//! 1) **Classify** the input URL. Non-repository URLs are not errors: a
//!    degraded record with the sentinel report text is persisted so an audit
//!    trail always exists.
//! 2) **Dedup** against the store by source URL, unless the caller forces a
//!    regeneration.
//! 3) **Analyze + sample**. Upstream failures also degrade into a sentinel
//!    record (owner/name kept) rather than failing the workflow.
//! 4) **Generate** the full report and its short summary. Failures here are
//!    hard failures for the single workflow.
//! 5) **Persist** the complete record with a statistics snapshot.
//!
//! The bulk workflow runs the same branches per item, strictly sequentially
//! with a fixed pacing delay, folding every error into a per-item outcome so
//! one bad repository never aborts its siblings.

pub mod bulk;
pub mod errors;
pub mod generator;
pub mod outcome;
pub mod pacer;
pub mod prompt;
pub mod single;

#[cfg(test)]
pub(crate) mod test_support;

use repo_analyzer::RepositoryHost;
use review_store::ReviewStore;

use crate::generator::ReportGenerator;
use crate::pacer::FixedIntervalPacer;

pub use crate::bulk::{BulkItem, BulkReport, MAX_BULK_ITEMS};
pub use crate::errors::{EngineError, EngineResult};
pub use crate::outcome::{ExistingReview, ItemOutcome, ReviewOutcome};
pub use crate::single::ReviewRequest;

/// Report text stored when a review could not be generated for the URL.
///
/// Both report fields of a degraded record hold this sentinel; callers must
/// not treat a populated `full_report` as proof of a model call.
pub const INVALID_REPOSITORY_REPORT: &str =
    "This URL does not point to a valid repository, so no review could be generated.";

/// Number of candidate code files sampled per review.
pub const MAX_SAMPLE_FILES: usize = 10;

/// Orchestrates the review workflows over injected collaborators.
#[derive(Debug, Clone)]
pub struct Reviewer<H, G> {
    pub(crate) host: H,
    pub(crate) generator: G,
    pub(crate) store: ReviewStore,
    pub(crate) pacer: FixedIntervalPacer,
}

impl<H, G> Reviewer<H, G>
where
    H: RepositoryHost + Sync,
    G: ReportGenerator + Sync,
{
    /// Wires the orchestrator with explicitly constructed collaborators.
    pub fn new(host: H, generator: G, store: ReviewStore, pacer: FixedIntervalPacer) -> Self {
        Self {
            host,
            generator,
            store,
            pacer,
        }
    }

    /// The store shared with the read-side endpoints.
    pub fn store(&self) -> &ReviewStore {
        &self.store
    }
}
