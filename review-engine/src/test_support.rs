//! Fakes shared by the workflow tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ai_report_service::{AiServiceError, CompletionRequest};
use repo_analyzer::errors::{HostError, HostResult};
use repo_analyzer::locator::RepoRef;
use repo_analyzer::types::{FileContent, RepoMetadata, TreeEntry, TreeEntryKind};
use repo_analyzer::RepositoryHost;
use review_store::ReviewStore;

use crate::generator::ReportGenerator;
use crate::pacer::FixedIntervalPacer;
use crate::single::ReviewRequest;
use crate::Reviewer;

/// Host that either serves a small fixed repository or is fully unreachable.
pub struct FakeHost {
    reachable: bool,
}

impl FakeHost {
    pub fn healthy() -> Self {
        Self { reachable: true }
    }

    pub fn unreachable() -> Self {
        Self { reachable: false }
    }
}

impl RepositoryHost for FakeHost {
    async fn metadata(&self, _repo: &RepoRef) -> HostResult<RepoMetadata> {
        if !self.reachable {
            return Err(HostError::Network("connection refused".into()));
        }
        Ok(RepoMetadata {
            name: "widgets".into(),
            description: Some("widget factory".into()),
            language: Some("JavaScript".into()),
            stargazers: 12,
            forks: 3,
            size: 99,
            created_at: None,
            updated_at: None,
            topics: vec![],
        })
    }

    async fn tree(&self, _repo: &RepoRef) -> HostResult<Vec<TreeEntry>> {
        if !self.reachable {
            return Err(HostError::Network("connection refused".into()));
        }
        Ok(vec![
            TreeEntry {
                path: "src".into(),
                kind: TreeEntryKind::Directory,
            },
            TreeEntry {
                path: "src/app.js".into(),
                kind: TreeEntryKind::File,
            },
            TreeEntry {
                path: "README.md".into(),
                kind: TreeEntryKind::File,
            },
            TreeEntry {
                path: "package.json".into(),
                kind: TreeEntryKind::File,
            },
        ])
    }

    async fn file_content(&self, _repo: &RepoRef, path: &str) -> HostResult<FileContent> {
        if !self.reachable {
            return Err(HostError::Network("connection refused".into()));
        }
        Ok(FileContent {
            path: path.to_string(),
            content: "console.log('hi')".into(),
            size: 17,
        })
    }
}

/// Generator returning canned responses, recording every request it sees.
#[derive(Clone)]
pub struct ScriptedGenerator {
    responses: Arc<Mutex<Vec<String>>>,
    endless: Option<String>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedGenerator {
    /// Responses handed out in order; panics when exhausted.
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queued: Vec<String> = responses.into_iter().map(Into::into).collect();
        queued.reverse(); // pop() then yields front-to-back
        Self {
            responses: Arc::new(Mutex::new(queued)),
            endless: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always returns the same text.
    pub fn endless(text: &str) -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            endless: Some(text.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl ReportGenerator for ScriptedGenerator {
    async fn complete(&self, req: &CompletionRequest) -> Result<String, AiServiceError> {
        self.calls.lock().unwrap().push(req.clone());
        if let Some(text) = &self.endless {
            return Ok(text.clone());
        }
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop()
            .expect("scripted generator ran out of responses"))
    }
}

/// Generator that always fails.
pub struct FailingGenerator;

impl ReportGenerator for FailingGenerator {
    async fn complete(&self, _req: &CompletionRequest) -> Result<String, AiServiceError> {
        Err(AiServiceError::EmptyChoices)
    }
}

/// Generator that succeeds until the n-th call (1-based), then fails.
pub struct FlakyGenerator {
    fail_from: usize,
    seen: AtomicUsize,
}

impl FlakyGenerator {
    pub fn fail_from_call(fail_from: usize) -> Self {
        Self {
            fail_from,
            seen: AtomicUsize::new(0),
        }
    }
}

impl ReportGenerator for FlakyGenerator {
    async fn complete(&self, _req: &CompletionRequest) -> Result<String, AiServiceError> {
        let call = self.seen.fetch_add(1, Ordering::SeqCst) + 1;
        if call >= self.fail_from {
            Err(AiServiceError::EmptyChoices)
        } else {
            Ok(format!("response {call}"))
        }
    }
}

/// Reviewer with a fresh store and no pacing delay.
pub fn reviewer<H, G>(host: H, generator: G) -> Reviewer<H, G>
where
    H: RepositoryHost + Sync,
    G: ReportGenerator + Sync,
{
    Reviewer::new(
        host,
        generator,
        ReviewStore::new(),
        FixedIntervalPacer::disabled(),
    )
}

/// Minimal single-review request for `url`.
pub fn simple_request(url: &str) -> ReviewRequest {
    ReviewRequest {
        source_url: url.to_string(),
        team_name: None,
        analysis_depth: review_store::AnalysisDepth::Detailed,
        include_tests: true,
        include_documentation: true,
        force: false,
    }
}
