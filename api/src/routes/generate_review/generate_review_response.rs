use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::routes::review_dto::ReviewDetail;

/// Response body for a freshly persisted review (complete or degraded).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReviewResponse {
    /// Human-readable message describing what happened.
    pub message: String,
    pub review: ReviewDetail,
}

/// Response body when a review for the URL already exists.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingReviewResponse {
    pub message: String,
    pub existing_review: ExistingReviewInfo,
    pub hint: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingReviewInfo {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub summary: String,
}
