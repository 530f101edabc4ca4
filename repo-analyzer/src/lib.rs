//! Repository inspection layer for the review pipeline.
//!
//! 1) **Locator** — classifies an input URL into repository / organization
//!    page / user profile / invalid without any network I/O.
//! 2) **Host client** — thin GitHub REST client (metadata, recursive tree,
//!    file contents) behind the [`host::RepositoryHost`] seam so the
//!    orchestrator can be exercised against a fake host.
//! 3) **Analyzer** — joins metadata + tree into a [`types::RepositoryAnalysis`]:
//!    structural counts, per-language file counts, marker files and the
//!    ordered candidate list of code files.
//! 4) **Sampler** — best-effort bounded fetch of candidate file contents;
//!    individual fetch failures are logged and skipped, never surfaced.
//!
//! No `async-trait` and no heap trait objects: the host seam uses plain
//! `impl Future + Send` returns with static dispatch.

pub mod analyzer;
pub mod errors;
pub mod github;
pub mod host;
pub mod locator;
pub mod sampler;
pub mod types;

pub use errors::{HostError, HostResult};
pub use github::{GitHubClient, GitHubConfig};
pub use host::RepositoryHost;
pub use locator::{RepoRef, UrlClassification, classify};
pub use types::{CodeSample, RepositoryAnalysis};
