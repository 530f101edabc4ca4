use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use tracing::instrument;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    routes::list_reviews_route::{ListQuery, ReviewListResponse},
};

/// HTTP endpoint listing reviews of one team, newest first.
#[instrument(name = "team_reviews_route", skip(state))]
pub async fn team_reviews_route(
    State(state): State<Arc<AppState>>,
    Path(team_name): Path<String>,
    Query(query): Query<ListQuery>,
) -> Response {
    let page = state
        .reviewer
        .store()
        .list_page_by_team(&team_name, query.page(), query.limit())
        .await;

    ApiResponse::success(ReviewListResponse::from_page(
        page,
        query.limit(),
        Some(team_name),
    ))
    .into_response_with_status(StatusCode::OK)
}
