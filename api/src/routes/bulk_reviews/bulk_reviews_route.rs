use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::Response,
};
use review_engine::BulkItem;
use tracing::{info, instrument};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppResult,
    routes::bulk_reviews::{
        bulk_reviews_request::BulkReviewsRequest, bulk_reviews_response::BulkReviewsResponse,
    },
};

/// HTTP endpoint for generating up to 50 reviews in one request.
///
/// Items run strictly sequentially with a fixed pause between them. Batch
/// validation failures (empty batch, more than 50 items, duplicate URLs)
/// answer 400 before any item is processed; past validation the endpoint
/// always answers 200 with per-item outcomes.
#[instrument(name = "bulk_reviews_route", skip(state, body), fields(items = body.repos.len()))]
pub async fn bulk_reviews_route(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BulkReviewsRequest>,
) -> AppResult<Response> {
    body.validate()?;

    let items: Vec<BulkItem> = body
        .repos
        .iter()
        .map(|entry| BulkItem {
            source_url: entry.github_url.trim().to_string(),
            team_name: entry.normalized_team_name(),
        })
        .collect();

    info!("starting bulk review run");
    let report = state
        .reviewer
        .run_bulk(
            &items,
            body.analysis_depth,
            body.include_tests,
            body.include_documentation,
        )
        .await?;

    Ok(
        ApiResponse::success(BulkReviewsResponse::from(report))
            .into_response_with_status(StatusCode::OK),
    )
}
