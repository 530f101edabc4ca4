//! Single-review workflow.
//!
//! State machine over one invocation; see the crate docs for the five
//! stages. The guiding rule: leave an audit trail. URL and upstream
//! problems persist a degraded record instead of failing, while generation
//! and store failures propagate without saving anything partial.

use ai_report_service::CompletionRequest;
use repo_analyzer::{RepositoryHost, analyzer, classify, locator::RepoRef, sampler};
use review_store::{AnalysisDepth, NewReview, RepoStatsSnapshot};
use tracing::{info, instrument, warn};

use crate::errors::EngineResult;
use crate::generator::ReportGenerator;
use crate::outcome::ReviewOutcome;
use crate::prompt::{
    REPORT_MAX_TOKENS, REPORT_TEMPERATURE, REVIEW_SYSTEM_PROMPT, SUMMARY_MAX_TOKENS,
    build_report_prompt, build_summary_prompt,
};
use crate::{INVALID_REPOSITORY_REPORT, MAX_SAMPLE_FILES, Reviewer};

/// Caller input for one single-review invocation.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub source_url: String,
    pub team_name: Option<String>,
    pub analysis_depth: AnalysisDepth,
    pub include_tests: bool,
    pub include_documentation: bool,
    /// Regenerate even when a review for this URL already exists.
    pub force: bool,
}

impl<H, G> Reviewer<H, G>
where
    H: RepositoryHost + Sync,
    G: ReportGenerator + Sync,
{
    /// Runs the single-review workflow end to end.
    #[instrument(skip(self, req), fields(url = %req.source_url, depth = %req.analysis_depth))]
    pub async fn generate_review(&self, req: &ReviewRequest) -> EngineResult<ReviewOutcome> {
        // 1. Classify. Everything that is not a repository degrades here.
        let repo = match into_repository(classify(&req.source_url)) {
            Ok(repo) => repo,
            Err(note) => {
                info!(%note, "URL did not classify as a repository, saving degraded record");
                let record = self.store.insert(degraded_record(req, None)).await;
                return Ok(ReviewOutcome::SavedInvalid { record, note });
            }
        };

        // 2. Dedup by source URL unless the caller forces a regeneration.
        if !req.force {
            if let Some(existing) = self.store.find_latest_by_url(&req.source_url).await {
                info!(id = %existing.id, "review already exists, skipping generation");
                return Ok(ReviewOutcome::AlreadyExists((&existing).into()));
            }
        }

        // 3. Analyze + sample. Upstream failure degrades, keeping owner/name.
        let analysis = match analyzer::analyze(&self.host, &repo).await {
            Ok(analysis) => analysis,
            Err(err) => {
                warn!(%repo, %err, "repository analysis failed, saving degraded record");
                let note = format!("repository analysis failed: {err}");
                let record = self.store.insert(degraded_record(req, Some(&repo))).await;
                return Ok(ReviewOutcome::SavedAnalysisFailed { record, note });
            }
        };
        let samples = sampler::sample(&self.host, &repo, &analysis.code_files, MAX_SAMPLE_FILES).await;

        // 4. Generate. Not wrapped: a model failure after a successful
        //    analysis is a reportable system error, not a content outcome.
        let full_report = self
            .generator
            .complete(&CompletionRequest {
                system: Some(REVIEW_SYSTEM_PROMPT.to_string()),
                prompt: build_report_prompt(&analysis, &samples, req.analysis_depth),
                max_tokens: REPORT_MAX_TOKENS,
                temperature: REPORT_TEMPERATURE,
            })
            .await?;
        let summary = self
            .generator
            .complete(&CompletionRequest {
                system: None,
                prompt: build_summary_prompt(&full_report),
                max_tokens: SUMMARY_MAX_TOKENS,
                temperature: REPORT_TEMPERATURE,
            })
            .await?;

        // 5. Persist the complete record with a stats snapshot.
        let record = self
            .store
            .insert(NewReview {
                source_url: req.source_url.clone(),
                repository_owner: Some(repo.owner.clone()),
                repository_name: Some(repo.name.clone()),
                team_name: req.team_name.clone(),
                repository_language: analysis.repository.language.clone(),
                repository_description: analysis.repository.description.clone(),
                analysis_depth: req.analysis_depth,
                include_tests: req.include_tests,
                include_documentation: req.include_documentation,
                full_report,
                summary,
                repository_stats: Some(RepoStatsSnapshot {
                    stars: analysis.repository.stargazers,
                    forks: analysis.repository.forks,
                    size: analysis.repository.size,
                    files: analysis.structure.total_files,
                    languages: analysis.languages.clone(),
                }),
            })
            .await;

        info!(id = %record.id, %repo, "review generation completed");
        Ok(ReviewOutcome::Completed { record })
    }
}

/// Splits the four-way classification into the repository case and the
/// user-facing note the fallback messaging uses.
fn into_repository(
    classification: repo_analyzer::UrlClassification,
) -> Result<RepoRef, String> {
    use repo_analyzer::UrlClassification::*;
    match classification {
        Repository(repo) => Ok(repo),
        OrganizationPage => {
            Err("URL points to an organization page, not a single repository".into())
        }
        UserProfilePage => Err("URL points to a user profile page, not a repository".into()),
        Invalid => Err("URL is not a recognized repository URL".into()),
    }
}

/// Record persisted for the two graceful-degradation branches.
fn degraded_record(req: &ReviewRequest, repo: Option<&RepoRef>) -> NewReview {
    NewReview {
        source_url: req.source_url.clone(),
        repository_owner: repo.map(|r| r.owner.clone()),
        repository_name: repo.map(|r| r.name.clone()),
        team_name: req.team_name.clone(),
        repository_language: None,
        repository_description: None,
        analysis_depth: req.analysis_depth,
        include_tests: req.include_tests,
        include_documentation: req.include_documentation,
        full_report: INVALID_REPOSITORY_REPORT.to_string(),
        summary: INVALID_REPOSITORY_REPORT.to_string(),
        repository_stats: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingGenerator, FakeHost, ScriptedGenerator, reviewer, simple_request};
    use crate::errors::EngineError;

    #[tokio::test]
    async fn completed_run_persists_a_full_record() {
        let host = FakeHost::healthy();
        let generator = ScriptedGenerator::new(["the full report", "the summary"]);
        let r = reviewer(host, generator);

        let outcome = r
            .generate_review(&simple_request("https://github.com/acme/widgets"))
            .await
            .unwrap();

        let ReviewOutcome::Completed { record } = outcome else {
            panic!("expected Completed, got {outcome:?}");
        };
        assert_eq!(record.repository_owner.as_deref(), Some("acme"));
        assert_eq!(record.repository_name.as_deref(), Some("widgets"));
        assert_eq!(record.full_report, "the full report");
        assert_eq!(record.summary, "the summary");
        let stats = record.repository_stats.as_ref().unwrap();
        assert_eq!(stats.languages.get("JavaScript"), Some(&1));

        // Exactly one record was persisted.
        assert_eq!(r.store().list_page(1, 10).await.total_count, 1);
    }

    #[tokio::test]
    async fn two_generator_calls_use_report_then_summary_budgets() {
        let host = FakeHost::healthy();
        let generator = ScriptedGenerator::new(["report", "summary"]);
        let r = reviewer(host, generator.clone());

        r.generate_review(&simple_request("https://github.com/acme/widgets"))
            .await
            .unwrap();

        let calls = generator.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].max_tokens, REPORT_MAX_TOKENS);
        assert!(calls[0].system.is_some());
        assert_eq!(calls[1].max_tokens, SUMMARY_MAX_TOKENS);
        // Summary input is the previously generated report text.
        assert!(calls[1].prompt.contains("report"));
    }

    #[tokio::test]
    async fn non_repository_url_saves_a_sentinel_record() {
        let r = reviewer(FakeHost::unreachable(), FailingGenerator);

        let outcome = r
            .generate_review(&simple_request("https://github.com/octocat"))
            .await
            .unwrap();

        let ReviewOutcome::SavedInvalid { record, note } = outcome else {
            panic!("expected SavedInvalid, got {outcome:?}");
        };
        assert!(record.repository_owner.is_none());
        assert!(record.repository_name.is_none());
        assert_eq!(record.full_report, INVALID_REPOSITORY_REPORT);
        assert_eq!(record.summary, INVALID_REPOSITORY_REPORT);
        assert!(record.repository_stats.is_none());
        assert!(note.contains("user profile"));
    }

    #[tokio::test]
    async fn analysis_failure_saves_a_degraded_record_with_owner_and_name() {
        let r = reviewer(FakeHost::unreachable(), FailingGenerator);

        let outcome = r
            .generate_review(&simple_request("https://github.com/acme/widgets"))
            .await
            .unwrap();

        let ReviewOutcome::SavedAnalysisFailed { record, .. } = outcome else {
            panic!("expected SavedAnalysisFailed, got {outcome:?}");
        };
        assert_eq!(record.repository_owner.as_deref(), Some("acme"));
        assert_eq!(record.repository_name.as_deref(), Some("widgets"));
        assert_eq!(record.full_report, INVALID_REPOSITORY_REPORT);
        assert!(record.repository_language.is_none());
        assert!(record.repository_stats.is_none());
    }

    #[tokio::test]
    async fn dedup_returns_the_first_record_and_creates_no_new_one() {
        let host = FakeHost::healthy();
        let r = reviewer(host, ScriptedGenerator::new(["r1", "s1", "r2", "s2"]));
        let req = simple_request("https://github.com/acme/widgets");

        let first = r.generate_review(&req).await.unwrap();
        let first_record = first.record().unwrap().clone();

        let second = r.generate_review(&req).await.unwrap();
        let ReviewOutcome::AlreadyExists(existing) = second else {
            panic!("expected AlreadyExists, got {second:?}");
        };
        assert_eq!(existing.id, first_record.id);
        assert_eq!(existing.summary, first_record.summary);
        assert_eq!(r.store().list_page(1, 10).await.total_count, 1);
    }

    #[tokio::test]
    async fn force_override_regenerates_despite_an_existing_review() {
        let host = FakeHost::healthy();
        let r = reviewer(host, ScriptedGenerator::new(["r1", "s1", "r2", "s2"]));
        let mut req = simple_request("https://github.com/acme/widgets");

        r.generate_review(&req).await.unwrap();
        req.force = true;
        let outcome = r.generate_review(&req).await.unwrap();

        assert!(matches!(outcome, ReviewOutcome::Completed { .. }));
        assert_eq!(r.store().list_page(1, 10).await.total_count, 2);
    }

    #[tokio::test]
    async fn generation_failure_propagates_and_saves_nothing() {
        let r = reviewer(FakeHost::healthy(), FailingGenerator);

        let err = r
            .generate_review(&simple_request("https://github.com/acme/widgets"))
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::Generation(_)));
        assert_eq!(r.store().list_page(1, 10).await.total_count, 0);
    }
}
