use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use serde::Serialize;
use tracing::instrument;

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_reviews: u64,
    /// Reviews created within the last 7 days.
    pub recent_reviews: u64,
    pub language_statistics: BTreeMap<String, u64>,
}

/// HTTP endpoint returning aggregate review statistics.
#[instrument(name = "stats_route", skip(state))]
pub async fn stats_route(State(state): State<Arc<AppState>>) -> Response {
    let stats = state.reviewer.store().aggregate_stats().await;

    ApiResponse::success(StatsResponse {
        total_reviews: stats.total_reviews,
        recent_reviews: stats.recent_reviews,
        language_statistics: stats.language_statistics,
    })
    .into_response_with_status(StatusCode::OK)
}
