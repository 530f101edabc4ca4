//! Text-completion backend for review report generation.
//!
//! A single request/response contract: system instructions + user prompt +
//! token budget + temperature in, plain text out. The transport is any
//! OpenAI-compatible `/v1/chat/completions` endpoint (OpenAI itself or a
//! local Ollama in `/v1` compatibility mode), so the orchestrator stays
//! provider-agnostic.

pub mod config;
pub mod errors;
pub mod service;

pub use config::CompletionConfig;
pub use errors::{AiServiceError, ConfigError, Result};
pub use service::{CompletionRequest, CompletionService};
