//! Bulk-review workflow.
//!
//! Items run strictly sequentially (shared, low upstream quota), with the
//! pacer's fixed pause after every item regardless of outcome. Each item is
//! isolated: any failure — including generation — is folded into that item's
//! outcome and never aborts the siblings. Outcomes keep input order.
//!
//! Divergence from the single workflow, kept on purpose: a dedup hit counts
//! as a per-item *failure* here so the batch summary surfaces it, while the
//! single workflow treats it as a soft no-op.

use std::collections::HashSet;

use repo_analyzer::RepositoryHost;
use review_store::AnalysisDepth;
use tracing::{info, instrument, warn};

use crate::errors::{EngineError, EngineResult};
use crate::generator::ReportGenerator;
use crate::outcome::{ItemOutcome, ReviewOutcome};
use crate::single::ReviewRequest;
use crate::Reviewer;

/// Upper bound on items per bulk request.
pub const MAX_BULK_ITEMS: usize = 50;

/// One entry of a bulk request.
#[derive(Debug, Clone)]
pub struct BulkItem {
    pub source_url: String,
    pub team_name: Option<String>,
}

/// Aggregate result of a bulk run. Always complete: per-item problems live
/// inside `results`, never as a partial response.
#[derive(Debug, Clone)]
pub struct BulkReport {
    /// Outcomes in the same order as the input items.
    pub results: Vec<ItemOutcome>,
    pub success_count: usize,
    pub failure_count: usize,
}

impl<H, G> Reviewer<H, G>
where
    H: RepositoryHost + Sync,
    G: ReportGenerator + Sync,
{
    /// Runs the bulk workflow over `items`.
    ///
    /// Validation (size cap, duplicate URLs) rejects the whole batch before
    /// any item is processed; past that point the run always succeeds.
    #[instrument(skip(self, items), fields(items = items.len(), depth = %depth))]
    pub async fn run_bulk(
        &self,
        items: &[BulkItem],
        depth: AnalysisDepth,
        include_tests: bool,
        include_documentation: bool,
    ) -> EngineResult<BulkReport> {
        validate_batch(items)?;

        let mut results = Vec::with_capacity(items.len());
        let mut success_count = 0;
        let mut failure_count = 0;

        for item in items {
            let req = ReviewRequest {
                source_url: item.source_url.clone(),
                team_name: item.team_name.clone(),
                analysis_depth: depth,
                include_tests,
                include_documentation,
                force: false,
            };

            let outcome = match self.generate_review(&req).await {
                Ok(ReviewOutcome::Completed { record }) => ItemOutcome::Saved {
                    source_url: item.source_url.clone(),
                    id: record.id,
                    note: None,
                },
                Ok(ReviewOutcome::SavedInvalid { record, note })
                | Ok(ReviewOutcome::SavedAnalysisFailed { record, note }) => ItemOutcome::Saved {
                    source_url: item.source_url.clone(),
                    id: record.id,
                    note: Some(note),
                },
                Ok(ReviewOutcome::AlreadyExists(existing)) => ItemOutcome::Failed {
                    source_url: item.source_url.clone(),
                    reason: format!("review already exists (id {})", existing.id),
                },
                Err(err) => {
                    warn!(url = %item.source_url, %err, "bulk item failed");
                    ItemOutcome::Failed {
                        source_url: item.source_url.clone(),
                        reason: err.to_string(),
                    }
                }
            };

            if outcome.is_saved() {
                success_count += 1;
            } else {
                failure_count += 1;
            }
            results.push(outcome);

            // Fixed pacing after every item, regardless of outcome.
            self.pacer.pause().await;
        }

        info!(success_count, failure_count, "bulk run finished");
        Ok(BulkReport {
            results,
            success_count,
            failure_count,
        })
    }
}

/// Batch pre-check: 1..=50 items, no case-insensitive duplicate URLs.
fn validate_batch(items: &[BulkItem]) -> EngineResult<()> {
    if items.is_empty() {
        return Err(EngineError::Validation(
            "at least one repository is required".into(),
        ));
    }
    if items.len() > MAX_BULK_ITEMS {
        return Err(EngineError::Validation(format!(
            "at most {MAX_BULK_ITEMS} repositories are allowed per bulk request"
        )));
    }

    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.source_url.to_lowercase()) {
            return Err(EngineError::Validation(format!(
                "duplicate repository URL: {}",
                item.source_url
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use review_store::AnalysisDepth;

    use super::*;
    use crate::test_support::{FakeHost, FlakyGenerator, ScriptedGenerator, reviewer};

    fn items(urls: &[&str]) -> Vec<BulkItem> {
        urls.iter()
            .map(|u| BulkItem {
                source_url: u.to_string(),
                team_name: None,
            })
            .collect()
    }

    async fn run<
        H: repo_analyzer::RepositoryHost + Sync,
        G: crate::generator::ReportGenerator + Sync,
    >(
        r: &Reviewer<H, G>,
        items: &[BulkItem],
    ) -> EngineResult<BulkReport> {
        r.run_bulk(items, AnalysisDepth::Detailed, true, true).await
    }

    #[tokio::test]
    async fn empty_and_oversized_batches_are_rejected_before_processing() {
        let r = reviewer(FakeHost::healthy(), ScriptedGenerator::endless("x"));

        assert!(matches!(
            run(&r, &[]).await,
            Err(EngineError::Validation(_))
        ));

        let urls: Vec<String> = (0..51).map(|i| format!("https://github.com/a/r{i}")).collect();
        let refs: Vec<&str> = urls.iter().map(String::as_str).collect();
        assert!(matches!(
            run(&r, &items(&refs)).await,
            Err(EngineError::Validation(_))
        ));

        // Nothing was persisted by the rejected batches.
        assert_eq!(r.store().list_page(1, 100).await.total_count, 0);
    }

    #[tokio::test]
    async fn duplicate_urls_are_rejected_case_insensitively() {
        let r = reviewer(FakeHost::healthy(), ScriptedGenerator::endless("x"));
        let batch = items(&[
            "https://github.com/acme/widgets",
            "https://github.com/ACME/Widgets",
        ]);

        assert!(matches!(
            run(&r, &batch).await,
            Err(EngineError::Validation(_))
        ));
        assert_eq!(r.store().list_page(1, 100).await.total_count, 0);
    }

    #[tokio::test]
    async fn unreachable_repositories_all_save_degraded_records() {
        let r = reviewer(FakeHost::unreachable(), ScriptedGenerator::endless("x"));
        let urls: Vec<String> = (0..50).map(|i| format!("https://github.com/a/r{i}")).collect();
        let refs: Vec<&str> = urls.iter().map(String::as_str).collect();

        let report = run(&r, &items(&refs)).await.unwrap();

        assert_eq!(report.results.len(), 50);
        assert_eq!(report.success_count, 50);
        assert_eq!(report.failure_count, 0);
        assert!(report.results.iter().all(ItemOutcome::is_saved));
        // 50 distinct degraded records were persisted.
        assert_eq!(r.store().list_page(1, 100).await.total_count, 50);
    }

    #[tokio::test]
    async fn outcomes_preserve_input_order_and_isolate_failures() {
        // Second item's generation fails; first succeeds.
        let r = reviewer(FakeHost::healthy(), FlakyGenerator::fail_from_call(3));
        let batch = items(&[
            "https://github.com/acme/alpha",
            "https://github.com/acme/beta",
        ]);

        let report = run(&r, &batch).await.unwrap();

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].source_url(), "https://github.com/acme/alpha");
        assert_eq!(report.results[1].source_url(), "https://github.com/acme/beta");
        assert!(report.results[0].is_saved());
        assert!(!report.results[1].is_saved());
        assert_eq!(report.success_count + report.failure_count, 2);
        // Only the first item persisted a record.
        assert_eq!(r.store().list_page(1, 100).await.total_count, 1);
    }

    #[tokio::test]
    async fn a_repeat_of_an_already_reviewed_url_fails_that_item_only() {
        let r = reviewer(FakeHost::healthy(), ScriptedGenerator::endless("x"));

        // Seed a review for alpha.
        run(&r, &items(&["https://github.com/acme/alpha"])).await.unwrap();

        let report = run(
            &r,
            &items(&[
                "https://github.com/acme/alpha",
                "https://github.com/acme/beta",
            ]),
        )
        .await
        .unwrap();

        assert!(!report.results[0].is_saved());
        assert!(report.results[1].is_saved());
        assert_eq!(report.success_count, 1);
        assert_eq!(report.failure_count, 1);
        let ItemOutcome::Failed { reason, .. } = &report.results[0] else {
            panic!("expected Failed");
        };
        assert!(reason.contains("already exists"));
    }

    #[tokio::test(start_paused = true)]
    async fn pacer_waits_after_every_item() {
        use std::time::Duration;

        use crate::pacer::FixedIntervalPacer;
        use review_store::ReviewStore;

        let r = Reviewer::new(
            FakeHost::unreachable(),
            ScriptedGenerator::endless("x"),
            ReviewStore::new(),
            FixedIntervalPacer::new(Duration::from_secs(1)),
        );
        let batch = items(&[
            "https://github.com/acme/alpha",
            "https://github.com/acme/beta",
        ]);

        let before = tokio::time::Instant::now();
        run(&r, &batch).await.unwrap();
        // One pause per item, including the last one.
        assert_eq!(before.elapsed(), Duration::from_secs(2));
    }
}
