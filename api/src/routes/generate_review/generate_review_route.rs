use std::sync::Arc;

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::Response,
};
use review_engine::{ReviewOutcome, ReviewRequest};
use tracing::{info, instrument};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppResult,
    routes::generate_review::{
        generate_review_request::{GenerateReviewQuery, GenerateReviewRequest},
        generate_review_response::{
            ExistingReviewInfo, ExistingReviewResponse, GenerateReviewResponse,
        },
    },
};

/// HTTP endpoint for generating a single review.
///
/// Runs the full pipeline: URL classification, repository analysis, report
/// generation and persistence. Non-repository URLs and unreachable
/// repositories still persist a degraded record and answer 201; a dedup hit
/// answers 200 with a pointer to the existing review unless `?force=true`.
#[instrument(
    name = "generate_review_route",
    skip(state, body),
    fields(url = %body.github_url)
)]
pub async fn generate_review_route(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GenerateReviewQuery>,
    Json(body): Json<GenerateReviewRequest>,
) -> AppResult<Response> {
    body.validate()?;

    let req = ReviewRequest {
        source_url: body.github_url.trim().to_string(),
        team_name: body.normalized_team_name(),
        analysis_depth: body.analysis_depth,
        include_tests: body.include_tests,
        include_documentation: body.include_documentation,
        force: query.force,
    };

    info!(force = query.force, "starting review generation");
    let outcome = state.reviewer.generate_review(&req).await?;

    let response = match outcome {
        ReviewOutcome::Completed { record } => ApiResponse::success(GenerateReviewResponse {
            message: "Code review report generated successfully".into(),
            review: (&record).into(),
        })
        .into_response_with_status(StatusCode::CREATED),

        ReviewOutcome::SavedInvalid { record, note }
        | ReviewOutcome::SavedAnalysisFailed { record, note } => {
            ApiResponse::success(GenerateReviewResponse {
                message: note,
                review: (&record).into(),
            })
            .into_response_with_status(StatusCode::CREATED)
        }

        ReviewOutcome::AlreadyExists(existing) => ApiResponse::success(ExistingReviewResponse {
            message: "Review already exists for this repository".into(),
            existing_review: ExistingReviewInfo {
                id: existing.id,
                created_at: existing.created_at,
                summary: existing.summary,
            },
            hint: "Add ?force=true to generate a new review".into(),
        })
        .into_response_with_status(StatusCode::OK),
    };

    Ok(response)
}
