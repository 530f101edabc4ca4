//! Review record storage.
//!
//! The store is the only shared mutable resource in the pipeline. Records
//! are append-only: created exactly once per workflow invocation and never
//! mutated afterwards except by explicit deletion. Each write is independent
//! (no cross-record transactions), so concurrent pipeline invocations are
//! safe without extra locking.
//!
//! The backend is an in-process table behind `Arc<RwLock<…>>` implementing
//! the full query contract: insert, lookup by id, latest-by-URL lookup for
//! deduplication, newest-first pagination (optionally filtered by team),
//! deletion and aggregate statistics.

pub mod record;
pub mod store;

pub use record::{AnalysisDepth, NewReview, RepoStatsSnapshot, ReviewRecord};
pub use store::{ReviewPage, ReviewStore, StoreError, StoreStats};
