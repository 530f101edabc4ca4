use review_store::AnalysisDepth;
use serde::Deserialize;

use crate::error_handler::{AppError, AppResult};
use crate::routes::generate_review::generate_review_request::{
    default_true, normalize_team_name, validate_team_name,
};

/// Request body for the bulk endpoint.
///
/// Batch-level constraints (item count, duplicate URLs) are enforced by the
/// review pipeline itself; this type only validates individual fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReviewsRequest {
    pub repos: Vec<BulkRepoEntry>,
    #[serde(default)]
    pub analysis_depth: AnalysisDepth,
    #[serde(default = "default_true")]
    pub include_tests: bool,
    #[serde(default = "default_true")]
    pub include_documentation: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRepoEntry {
    pub github_url: String,
    pub team_name: Option<String>,
}

impl BulkReviewsRequest {
    pub fn validate(&self) -> AppResult<()> {
        for (index, entry) in self.repos.iter().enumerate() {
            if entry.github_url.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "repos[{index}]: Repository URL is required"
                )));
            }
            validate_team_name(entry.team_name.as_deref()).map_err(|_| {
                AppError::Validation(format!(
                    "repos[{index}]: Team name must be less than 100 characters"
                ))
            })?;
        }
        Ok(())
    }
}

impl BulkRepoEntry {
    pub fn normalized_team_name(&self) -> Option<String> {
        normalize_team_name(self.team_name.as_deref())
    }
}
