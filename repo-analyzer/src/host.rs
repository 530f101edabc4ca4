//! Seam between the analyzer/sampler and the concrete hosting API client.
//!
//! Static dispatch only: methods return `impl Future + Send`, so generic
//! callers stay `Send` without `async-trait` or boxed futures. Production
//! code uses [`crate::github::GitHubClient`]; tests substitute fakes.

use std::future::Future;

use crate::errors::HostResult;
use crate::locator::RepoRef;
use crate::types::{FileContent, RepoMetadata, TreeEntry};

/// Read-only view of a code-hosting API.
pub trait RepositoryHost {
    /// Fetches repository metadata (name, description, counters, topics).
    fn metadata(&self, repo: &RepoRef) -> impl Future<Output = HostResult<RepoMetadata>> + Send;

    /// Fetches the full recursive tree listing at `HEAD`.
    fn tree(&self, repo: &RepoRef) -> impl Future<Output = HostResult<Vec<TreeEntry>>> + Send;

    /// Fetches and decodes one file's content.
    fn file_content(
        &self,
        repo: &RepoRef,
        path: &str,
    ) -> impl Future<Output = HostResult<FileContent>> + Send;
}
