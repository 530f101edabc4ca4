use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use crate::core::http::response_envelope::ApiResponse;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("repository host client setup failed: {0}")]
    Host(#[from] repo_analyzer::HostError),

    #[error(transparent)]
    Generator(#[from] ai_report_service::AiServiceError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("review not found: {0}")]
    ReviewNotFound(Uuid),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ReviewNotFound(_) => StatusCode::NOT_FOUND,

            // 5xx
            AppError::Host(_) | AppError::Generator(_) | AppError::Bind(_) | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Host(_) => "HOST_CLIENT_ERROR",
            AppError::Generator(_) => "GENERATION_FAILED",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::Validation(_) => "VALIDATION_FAILED",
            AppError::ReviewNotFound(_) => "NOT_FOUND",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 5xx detail goes to the logs, clients get a generic message.
        let message = if status.is_server_error() {
            error!(error = %self, "request failed");
            "Internal server error.".to_string()
        } else {
            self.to_string()
        };

        ApiResponse::<()>::error(self.error_code(), message).into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<review_engine::EngineError> for AppError {
    fn from(err: review_engine::EngineError) -> Self {
        use review_engine::EngineError;
        match err {
            EngineError::Validation(msg) => AppError::Validation(msg),
            EngineError::Generation(e) => AppError::Generator(e),
            EngineError::Store(review_store::StoreError::NotFound(id)) => {
                AppError::ReviewNotFound(id)
            }
        }
    }
}

impl From<review_store::StoreError> for AppError {
    fn from(err: review_store::StoreError) -> Self {
        match err {
            review_store::StoreError::NotFound(id) => AppError::ReviewNotFound(id),
        }
    }
}
