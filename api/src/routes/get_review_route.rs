use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::review_dto::ReviewDetail,
};

/// HTTP endpoint returning one review including the full report text.
#[instrument(name = "get_review_route", skip(state))]
pub async fn get_review_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    let record = state
        .reviewer
        .store()
        .get_by_id(id)
        .await
        .ok_or(AppError::ReviewNotFound(id))?;

    Ok(ApiResponse::success(ReviewDetail::from(&record))
        .into_response_with_status(StatusCode::OK))
}
