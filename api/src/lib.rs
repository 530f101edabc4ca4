//! HTTP layer of the review backend.
//!
//! Routes are nested under `/api/reviews` with a plain service banner at the
//! root. All handlers share one [`core::app_state::AppState`] carrying the
//! wired review pipeline; responses use the uniform
//! [`core::http::response_envelope::ApiResponse`] envelope.

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::json;
use tokio::signal;
use tracing::info;

pub mod core;
pub mod error_handler;
mod routes;

use crate::core::app_state::AppState;
use crate::error_handler::{AppError, AppResult};
use crate::routes::{
    bulk_reviews::bulk_reviews_route::bulk_reviews_route,
    delete_review_route::delete_review_route,
    generate_review::generate_review_route::generate_review_route,
    get_review_route::get_review_route, list_reviews_route::list_reviews_route,
    sample_csv_route::sample_csv_route, stats_route::stats_route,
    team_reviews_route::team_reviews_route,
};

/// Binds the listener and serves requests until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let host_url = std::env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let state = Arc::new(AppState::from_env()?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(%host_url, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    let reviews = Router::new()
        .route("/generate", post(generate_review_route))
        .route("/bulk", post(bulk_reviews_route))
        .route("/bulk/sample-csv", get(sample_csv_route))
        .route("/", get(list_reviews_route))
        .route("/stats", get(stats_route))
        .route("/team/{team_name}", get(team_reviews_route))
        .route("/{id}", get(get_review_route).delete(delete_review_route));

    Router::new()
        .route("/", get(service_banner))
        .nest("/api/reviews", reviews)
        .with_state(state)
}

/// Root banner listing the available endpoints.
async fn service_banner() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Git Code Review Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /api/reviews/generate": "Generate code review report from GitHub repository",
            "POST /api/reviews/bulk": "Generate multiple code review reports (bulk upload)",
            "GET /api/reviews/bulk/sample-csv": "Download sample CSV for bulk upload",
            "GET /api/reviews": "Get all code reviews",
            "GET /api/reviews/:id": "Get specific code review",
            "GET /api/reviews/stats": "Get statistics",
            "GET /api/reviews/team/:teamName": "Get reviews by team name",
            "DELETE /api/reviews/:id": "Delete code review"
        }
    }))
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
    }
}
