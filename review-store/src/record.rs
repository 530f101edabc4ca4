//! Persisted review entity and its value types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How thorough the generated report should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisDepth {
    Basic,
    #[default]
    Detailed,
    Comprehensive,
}

impl std::fmt::Display for AnalysisDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AnalysisDepth::Basic => "basic",
            AnalysisDepth::Detailed => "detailed",
            AnalysisDepth::Comprehensive => "comprehensive",
        };
        f.write_str(s)
    }
}

/// Snapshot of repository statistics copied from the analysis at save time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoStatsSnapshot {
    pub stars: u64,
    pub forks: u64,
    /// Repository size in kilobytes.
    pub size: u64,
    /// Total tree entries at analysis time.
    pub files: u64,
    /// Recognized-language name → matching file count.
    pub languages: BTreeMap<String, u64>,
}

/// Fields of a review record before the store assigns id and timestamp.
///
/// `repository_owner`/`repository_name` are `None` when the source URL did
/// not resolve to a repository; `repository_stats` is `None` whenever the
/// analysis did not complete. A populated `full_report` does not imply a
/// successful model call — degraded records hold a fixed sentinel text.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub source_url: String,
    pub repository_owner: Option<String>,
    pub repository_name: Option<String>,
    pub team_name: Option<String>,
    pub repository_language: Option<String>,
    pub repository_description: Option<String>,
    pub analysis_depth: AnalysisDepth,
    pub include_tests: bool,
    pub include_documentation: bool,
    pub full_report: String,
    pub summary: String,
    pub repository_stats: Option<RepoStatsSnapshot>,
}

/// One persisted review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: Uuid,
    pub source_url: String,
    pub repository_owner: Option<String>,
    pub repository_name: Option<String>,
    pub team_name: Option<String>,
    pub repository_language: Option<String>,
    pub repository_description: Option<String>,
    pub analysis_depth: AnalysisDepth,
    pub include_tests: bool,
    pub include_documentation: bool,
    pub full_report: String,
    pub summary: String,
    pub repository_stats: Option<RepoStatsSnapshot>,
    pub created_at: DateTime<Utc>,
}

impl ReviewRecord {
    /// `owner/name` when both halves are known.
    pub fn repository_full_name(&self) -> Option<String> {
        match (&self.repository_owner, &self.repository_name) {
            (Some(owner), Some(name)) => Some(format!("{owner}/{name}")),
            _ => None,
        }
    }
}
