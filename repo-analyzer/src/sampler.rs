//! Best-effort sampling of candidate code files.
//!
//! Contract: take the first `max_files` candidates in the order the analyzer
//! produced them, fetch sequentially, cap each content at
//! [`SAMPLE_CONTENT_CAP`] characters. A failed fetch is a diagnostic, not an
//! error — the file is skipped and the batch continues, so the result length
//! is anywhere between 0 and `max_files`.

use tracing::{debug, instrument, warn};

use crate::host::RepositoryHost;
use crate::locator::RepoRef;
use crate::types::CodeSample;

/// Character cap applied to each sampled file's content.
pub const SAMPLE_CONTENT_CAP: usize = 2000;

/// Fetches up to `max_files` candidate files and returns the ones that
/// succeeded, in candidate order.
#[instrument(skip(host, candidates), fields(repo = %repo, candidates = candidates.len()))]
pub async fn sample<H: RepositoryHost>(
    host: &H,
    repo: &RepoRef,
    candidates: &[String],
    max_files: usize,
) -> Vec<CodeSample> {
    let mut samples = Vec::new();

    for path in candidates.iter().take(max_files) {
        match host.file_content(repo, path).await {
            Ok(file) => {
                samples.push(CodeSample {
                    path: path.clone(),
                    content: truncate_chars(&file.content, SAMPLE_CONTENT_CAP),
                    size: file.size,
                });
            }
            Err(err) => {
                warn!(%path, %err, "failed to fetch sample content, skipping file");
            }
        }
    }

    debug!(fetched = samples.len(), "sampling done");
    samples
}

/// Returns the prefix of `s` holding at most `cap` characters.
fn truncate_chars(s: &str, cap: usize) -> String {
    match s.char_indices().nth(cap) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::errors::{HostError, HostResult};
    use crate::types::{FileContent, RepoMetadata, TreeEntry};

    /// Host with a fixed set of fetchable paths; everything else 404s.
    struct MapHost {
        files: HashMap<String, String>,
    }

    impl RepositoryHost for MapHost {
        async fn metadata(&self, _repo: &RepoRef) -> HostResult<RepoMetadata> {
            Err(HostError::NotFound)
        }

        async fn tree(&self, _repo: &RepoRef) -> HostResult<Vec<TreeEntry>> {
            Err(HostError::NotFound)
        }

        async fn file_content(&self, _repo: &RepoRef, path: &str) -> HostResult<FileContent> {
            match self.files.get(path) {
                Some(content) => Ok(FileContent {
                    path: path.to_string(),
                    content: content.clone(),
                    size: content.len() as u64,
                }),
                None => Err(HostError::NotFound),
            }
        }
    }

    fn repo() -> RepoRef {
        RepoRef {
            owner: "acme".into(),
            name: "widgets".into(),
        }
    }

    fn host_with(paths: &[(&str, &str)]) -> MapHost {
        MapHost {
            files: paths
                .iter()
                .map(|(p, c)| (p.to_string(), c.to_string()))
                .collect(),
        }
    }

    #[tokio::test]
    async fn takes_only_the_first_max_files_candidates() {
        let host = host_with(&[("a.js", "a"), ("b.js", "b"), ("c.js", "c")]);
        let candidates: Vec<String> = ["a.js", "b.js", "c.js"].map(String::from).into();

        let samples = sample(&host, &repo(), &candidates, 2).await;
        let paths: Vec<&str> = samples.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, ["a.js", "b.js"]);
    }

    #[tokio::test]
    async fn a_failing_fetch_does_not_abort_the_batch() {
        let host = host_with(&[("a.js", "a"), ("c.js", "c")]);
        let candidates: Vec<String> = ["a.js", "missing.js", "c.js"].map(String::from).into();

        let samples = sample(&host, &repo(), &candidates, 10).await;
        let paths: Vec<&str> = samples.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, ["a.js", "c.js"]);
    }

    #[tokio::test]
    async fn all_failures_yield_an_empty_result() {
        let host = host_with(&[]);
        let candidates: Vec<String> = ["x.js", "y.js"].map(String::from).into();
        assert!(sample(&host, &repo(), &candidates, 5).await.is_empty());
    }

    #[tokio::test]
    async fn content_is_truncated_to_the_cap() {
        let long = "x".repeat(SAMPLE_CONTENT_CAP + 500);
        let host = host_with(&[("big.js", long.as_str())]);
        let candidates = vec!["big.js".to_string()];

        let samples = sample(&host, &repo(), &candidates, 1).await;
        assert_eq!(samples[0].content.len(), SAMPLE_CONTENT_CAP);
        assert!(long.starts_with(&samples[0].content));
        // Reported size stays the original, pre-truncation size.
        assert_eq!(samples[0].size, long.len() as u64);
    }

    #[test]
    fn truncation_is_character_based_not_byte_based() {
        let s = "héllo wörld";
        assert_eq!(truncate_chars(s, 4), "héll");
        assert_eq!(truncate_chars(s, 100), s);
    }
}
