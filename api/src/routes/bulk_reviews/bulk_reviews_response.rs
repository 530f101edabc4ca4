use review_engine::{BulkReport, ItemOutcome};
use serde::Serialize;
use uuid::Uuid;

/// Aggregate response of a bulk run; per-item results keep input order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReviewsResponse {
    pub message: String,
    pub results: Vec<BulkItemResult>,
    pub success_count: usize,
    pub failure_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum BulkItemResult {
    #[serde(rename_all = "camelCase")]
    Saved {
        github_url: String,
        review_id: Uuid,
        /// Present for degraded records (invalid URL, analysis failure).
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Failed { github_url: String, reason: String },
}

impl From<ItemOutcome> for BulkItemResult {
    fn from(outcome: ItemOutcome) -> Self {
        match outcome {
            ItemOutcome::Saved {
                source_url,
                id,
                note,
            } => BulkItemResult::Saved {
                github_url: source_url,
                review_id: id,
                note,
            },
            ItemOutcome::Failed { source_url, reason } => BulkItemResult::Failed {
                github_url: source_url,
                reason,
            },
        }
    }
}

impl From<BulkReport> for BulkReviewsResponse {
    fn from(report: BulkReport) -> Self {
        Self {
            message: format!(
                "Bulk review completed: {} succeeded, {} failed",
                report.success_count, report.failure_count
            ),
            results: report.results.into_iter().map(Into::into).collect(),
            success_count: report.success_count,
            failure_count: report.failure_count,
        }
    }
}
