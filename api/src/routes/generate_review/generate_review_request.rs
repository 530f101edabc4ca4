use review_store::AnalysisDepth;
use serde::Deserialize;

use crate::error_handler::{AppError, AppResult};

/// Request body for generating a single review.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReviewRequest {
    /// Repository URL to review.
    pub github_url: String,
    /// Optional team attribution, at most 100 characters.
    pub team_name: Option<String>,
    #[serde(default)]
    pub analysis_depth: AnalysisDepth,
    #[serde(default = "default_true")]
    pub include_tests: bool,
    #[serde(default = "default_true")]
    pub include_documentation: bool,
}

/// Query parameters of the generate endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateReviewQuery {
    /// Regenerate even when a review for this URL already exists.
    #[serde(default)]
    pub force: bool,
}

impl GenerateReviewRequest {
    /// Field-level validation, mirrored by the bulk request.
    pub fn validate(&self) -> AppResult<()> {
        if self.github_url.trim().is_empty() {
            return Err(AppError::Validation("Repository URL is required".into()));
        }
        validate_team_name(self.team_name.as_deref())?;
        Ok(())
    }

    /// Trimmed team name, with empty strings collapsed to `None`.
    pub fn normalized_team_name(&self) -> Option<String> {
        normalize_team_name(self.team_name.as_deref())
    }
}

pub(crate) fn validate_team_name(team_name: Option<&str>) -> AppResult<()> {
    if let Some(team) = team_name {
        if team.trim().chars().count() > 100 {
            return Err(AppError::Validation(
                "Team name must be less than 100 characters".into(),
            ));
        }
    }
    Ok(())
}

pub(crate) fn normalize_team_name(team_name: Option<&str>) -> Option<String> {
    team_name
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned)
}

pub(crate) fn default_true() -> bool {
    true
}
