//! Environment-driven configuration for the completion client.

use crate::errors::{Result, env_opt_u64, must_env, validate_http_endpoint};

/// Configuration for the chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// API base, e.g. "https://api.openai.com" or "http://localhost:11434".
    pub endpoint: String,
    /// Model name passed through to the provider.
    pub model: String,
    /// Bearer key; optional because local providers do not require one.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl CompletionConfig {
    /// Loads configuration from the environment.
    ///
    /// - `REPORT_LLM_ENDPOINT` — required, http(s) base URL
    /// - `REPORT_LLM_MODEL`    — required
    /// - `REPORT_LLM_API_KEY`  — optional
    /// - `REPORT_LLM_TIMEOUT_SECS` — optional, defaults to 120
    pub fn from_env() -> Result<Self> {
        let endpoint = must_env("REPORT_LLM_ENDPOINT")?;
        validate_http_endpoint("REPORT_LLM_ENDPOINT", &endpoint)?;

        let model = must_env("REPORT_LLM_MODEL")?;
        let api_key = std::env::var("REPORT_LLM_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let timeout_secs = env_opt_u64("REPORT_LLM_TIMEOUT_SECS")?.unwrap_or(120);

        Ok(Self {
            endpoint,
            model,
            api_key,
            timeout_secs,
        })
    }
}
