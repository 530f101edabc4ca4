//! Unified error handling for `ai-report-service`.
//!
//! One top-level [`AiServiceError`] for the whole crate, with config errors
//! grouped in [`ConfigError`]. Messages carry the `[AI Report Service]`
//! prefix to simplify attribution in logs.

use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, AiServiceError>;

/// Top-level error for the `ai-report-service` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AiServiceError {
    /// Configuration/validation errors (startup time).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Upstream returned a non-successful HTTP status.
    #[error("[AI Report Service] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        status: u16,
        url: String,
        /// Short, trimmed snippet of the response body.
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("[AI Report Service] decode error: {0}")]
    Decode(String),

    /// The completion response contained no usable choice.
    #[error("[AI Report Service] completion response had no choices")]
    EmptyChoices,

    /// Underlying HTTP transport error (timeouts included).
    #[error("[AI Report Service] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[AI Report Service] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// Value had the wrong format (e.g., invalid URL scheme).
    #[error("[AI Report Service] invalid format in {var}: {reason}")]
    InvalidFormat {
        var: &'static str,
        reason: &'static str,
    },

    /// A number failed to parse.
    #[error("[AI Report Service] invalid number in {var}: {reason}")]
    InvalidNumber {
        var: &'static str,
        reason: &'static str,
    },
}

/// Fetches a required, non-empty environment variable.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
pub fn env_opt_u64(name: &'static str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<u64>().map(Some).map_err(|_| {
            AiServiceError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            })
        }),
        _ => Ok(None),
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Trims a response body to a short, single-line snippet for error messages.
pub fn make_snippet(body: &str) -> String {
    const MAX: usize = 200;
    let line = body.split_whitespace().collect::<Vec<_>>().join(" ");
    match line.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}…", &line[..idx]),
        None => line,
    }
}
