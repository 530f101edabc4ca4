//! Error hierarchy for the repository host layer.
//!
//! Goals:
//! - Single error type for everything that talks to the hosting API.
//! - Status-aware mapping (404→NotFound, 403→Forbidden, 429→RateLimited,
//!   5xx→Server) so callers can pick user-facing wording per sub-kind.
//! - Ergonomic `?` via `From` impls, no dynamic dispatch.

use thiserror::Error;

/// Convenient alias for host-layer results.
pub type HostResult<T> = Result<T, HostError>;

/// Failure while fetching repository metadata, tree or file contents.
#[derive(Debug, Error)]
pub enum HostError {
    /// Repository or path does not exist, or is private (HTTP 404).
    #[error("repository not found or private")]
    NotFound,

    /// Forbidden, typically an exhausted unauthenticated quota (HTTP 403).
    #[error("hosting API quota exceeded or access forbidden")]
    Forbidden,

    /// Rate limited (HTTP 429).
    #[error("rate limited")]
    RateLimited,

    /// Server-side failure at the hosting API (HTTP 5xx).
    #[error("hosting API server error: status {0}")]
    Server(u16),

    /// Other HTTP status not covered above.
    #[error("http status error: {0}")]
    HttpStatus(u16),

    /// Timeout at transport level.
    #[error("timeout")]
    Timeout,

    /// Network/transport failure without status (DNS/connect/reset).
    #[error("network error: {0}")]
    Network(String),

    /// JSON deserialization error.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Unexpected/invalid shape of the hosting API response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for HostError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return HostError::Timeout;
        }
        if let Some(status) = e.status() {
            let code = status.as_u16();
            return match code {
                403 => HostError::Forbidden,
                404 => HostError::NotFound,
                429 => HostError::RateLimited,
                500..=599 => HostError::Server(code),
                _ => HostError::HttpStatus(code),
            };
        }
        HostError::Network(e.to_string())
    }
}
