use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppResult,
};

#[derive(Debug, Serialize)]
pub struct DeleteReviewResponse {
    pub message: String,
}

/// HTTP endpoint deleting one review; 404 when the id is unknown.
#[instrument(name = "delete_review_route", skip(state))]
pub async fn delete_review_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    state.reviewer.store().delete(id).await?;

    Ok(ApiResponse::success(DeleteReviewResponse {
        message: "Review deleted successfully".into(),
    })
    .into_response_with_status(StatusCode::OK))
}
