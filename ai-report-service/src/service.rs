//! OpenAI-compatible completion client.
//!
//! Minimal, non-streaming client around `POST {endpoint}/v1/chat/completions`.
//! Constructor validation: endpoint must use http/https; the API key, when
//! present, is installed as a default `Authorization: Bearer …` header.
//! Errors are normalized via [`crate::errors::AiServiceError`].

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::CompletionConfig;
use crate::errors::{AiServiceError, Result, make_snippet, validate_http_endpoint};

/// One text-completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Optional system instructions prepended to the conversation.
    pub system: Option<String>,
    /// User prompt.
    pub prompt: String,
    /// Output token budget.
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Thin client for an OpenAI-compatible chat endpoint.
#[derive(Debug, Clone)]
pub struct CompletionService {
    client: reqwest::Client,
    cfg: CompletionConfig,
    url_chat: String,
}

impl CompletionService {
    /// Creates a new [`CompletionService`] from the given config.
    ///
    /// # Errors
    /// - [`AiServiceError::Config`] if the endpoint scheme is invalid
    /// - [`AiServiceError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: CompletionConfig) -> Result<Self> {
        validate_http_endpoint("REPORT_LLM_ENDPOINT", &cfg.endpoint)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(key) = &cfg.api_key {
            let value = header::HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| AiServiceError::Decode(format!("invalid API key header: {e}")))?;
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()?;

        let url_chat = format!("{}/v1/chat/completions", cfg.endpoint.trim_end_matches('/'));

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs,
            "CompletionService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Performs a non-streaming chat completion and returns the text of the
    /// first choice.
    ///
    /// # Errors
    /// - [`AiServiceError::HttpStatus`] for non-2xx responses
    /// - [`AiServiceError::HttpTransport`] for client/network failures
    /// - [`AiServiceError::Decode`] if the JSON cannot be parsed
    /// - [`AiServiceError::EmptyChoices`] if no choice is returned
    pub async fn complete(&self, req: &CompletionRequest) -> Result<String> {
        let started = Instant::now();
        let body = ChatCompletionRequest::from_request(&self.cfg.model, req);

        debug!(
            model = %self.cfg.model,
            prompt_len = req.prompt.len(),
            has_system = req.system.is_some(),
            max_tokens = req.max_tokens,
            temperature = req.temperature,
            "POST {}", self.url_chat
        );

        let resp = self.client.post(&self.url_chat).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let url = self.url_chat.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                status,
                %url,
                %snippet,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "chat completion returned non-success status"
            );

            return Err(AiServiceError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        let out: ChatCompletionResponse = resp.json().await.map_err(|e| {
            AiServiceError::Decode(format!(
                "serde error: {e}; expected `choices[0].message.content`"
            ))
        })?;

        let content = out
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .ok_or(AiServiceError::EmptyChoices)?;

        info!(
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis(),
            output_len = content.len(),
            "chat completion completed"
        );

        Ok(content)
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Minimal request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

impl<'a> ChatCompletionRequest<'a> {
    fn from_request(model: &'a str, req: &'a CompletionRequest) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &req.system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &req.prompt,
        });

        Self {
            model,
            messages,
            temperature: req.temperature,
            max_tokens: req.max_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
