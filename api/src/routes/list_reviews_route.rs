use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use review_store::ReviewPage;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    routes::review_dto::{Pagination, ReviewSummary},
};

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;

/// Shared query parameters of the paginated listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl ListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Listing payload shared with the team endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    pub reviews: Vec<ReviewSummary>,
    pub pagination: Pagination,
}

impl ReviewListResponse {
    pub fn from_page(page: ReviewPage, limit: u64, team_name: Option<String>) -> Self {
        Self {
            team_name,
            reviews: page.reviews.iter().map(Into::into).collect(),
            pagination: Pagination {
                current_page: page.current_page,
                total_pages: page.total_pages,
                total_count: page.total_count,
                limit,
            },
        }
    }
}

/// HTTP endpoint listing all reviews, newest first.
#[instrument(name = "list_reviews_route", skip(state))]
pub async fn list_reviews_route(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let page = state
        .reviewer
        .store()
        .list_page(query.page(), query.limit())
        .await;

    ApiResponse::success(ReviewListResponse::from_page(page, query.limit(), None))
        .into_response_with_status(StatusCode::OK)
}
