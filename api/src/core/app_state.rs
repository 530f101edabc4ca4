use ai_report_service::{CompletionConfig, CompletionService};
use repo_analyzer::{GitHubClient, GitHubConfig};
use review_engine::Reviewer;
use review_engine::pacer::FixedIntervalPacer;
use review_store::ReviewStore;

use crate::error_handler::AppResult;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Review pipeline wired with the production host and generator.
    pub reviewer: Reviewer<GitHubClient, CompletionService>,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// Fails fast on a missing model endpoint so a misconfigured service
    /// never starts accepting requests.
    pub fn from_env() -> AppResult<Self> {
        let host = GitHubClient::new(GitHubConfig::from_env())?;
        let generator = CompletionService::new(CompletionConfig::from_env()?)?;

        let reviewer = Reviewer::new(
            host,
            generator,
            ReviewStore::new(),
            FixedIntervalPacer::default_bulk(),
        );

        Ok(Self { reviewer })
    }
}
