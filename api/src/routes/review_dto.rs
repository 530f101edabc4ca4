//! Wire representations of persisted reviews shared by several routes.

use chrono::{DateTime, Utc};
use review_store::{AnalysisDepth, RepoStatsSnapshot, ReviewRecord};
use serde::Serialize;
use uuid::Uuid;

/// Full review payload returned by the single-review endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDetail {
    pub id: Uuid,
    pub github_url: String,
    /// `owner/name`, absent for degraded records without a parsed repository.
    pub repository_name: Option<String>,
    pub team_name: Option<String>,
    pub repository_language: Option<String>,
    pub repository_description: Option<String>,
    pub summary: String,
    pub full_report: String,
    pub created_at: DateTime<Utc>,
    pub analysis_depth: AnalysisDepth,
    pub repository_stats: Option<RepoStatsSnapshot>,
}

impl From<&ReviewRecord> for ReviewDetail {
    fn from(record: &ReviewRecord) -> Self {
        Self {
            id: record.id,
            github_url: record.source_url.clone(),
            repository_name: record.repository_full_name(),
            team_name: record.team_name.clone(),
            repository_language: record.repository_language.clone(),
            repository_description: record.repository_description.clone(),
            summary: record.summary.clone(),
            full_report: record.full_report.clone(),
            created_at: record.created_at,
            analysis_depth: record.analysis_depth,
            repository_stats: record.repository_stats.clone(),
        }
    }
}

/// Compact review payload for the listing endpoints (no full report).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub id: Uuid,
    pub github_url: String,
    pub repository_name: Option<String>,
    pub team_name: Option<String>,
    pub repository_language: Option<String>,
    pub summary: String,
    pub created_at: DateTime<Utc>,
    pub analysis_depth: AnalysisDepth,
}

impl From<&ReviewRecord> for ReviewSummary {
    fn from(record: &ReviewRecord) -> Self {
        Self {
            id: record.id,
            github_url: record.source_url.clone(),
            repository_name: record.repository_full_name(),
            team_name: record.team_name.clone(),
            repository_language: record.repository_language.clone(),
            summary: record.summary.clone(),
            created_at: record.created_at,
            analysis_depth: record.analysis_depth,
        }
    }
}

/// Pagination block attached to listing responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub limit: u64,
}
