//! Default LLM configs loaded strictly from environment variables.
//!
//! Convenience constructors for [`LlmModelConfig`], grouped by provider and
//! role. Two roles are used by the QA pipeline:
//!
//! - **Chat**      → generation model (filter extraction + answer composition)
//! - **Embedding** → embedding generator for vector search
//!
//! # Environment variables
//!
//! Gemini-specific:
//! - `GEMINI_API_KEY`  = API key (mandatory)
//! - `GEMINI_MODEL`    = generation model (default `gemini-2.0-pro-exp-02-05`)
//! - `GEMINI_URL`      = API base (default `https://generativelanguage.googleapis.com`)
//!
//! Ollama-specific:
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (mandatory)
//! - `OLLAMA_MODEL`                = generation model (mandatory)
//! - `EMBEDDING_MODEL`             = embedding model (mandatory)
//!
//! Common:
//! - `LLM_MAX_TOKENS` = optional max tokens (u32)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{ConfigError, LlmError, env_opt_u32, must_env, validate_http_endpoint},
};

const GEMINI_DEFAULT_URL: &str = "https://generativelanguage.googleapis.com";
const GEMINI_DEFAULT_MODEL: &str = "gemini-2.0-pro-exp-02-05";

/// Resolves the Ollama endpoint strictly from environment.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if both are missing
/// - [`ConfigError::InvalidNumber`] if `OLLAMA_PORT` is invalid
/// - [`ConfigError::InvalidFormat`] if `OLLAMA_URL` lacks an HTTP scheme
fn ollama_endpoint() -> Result<String, LlmError> {
    if let Ok(url) = std::env::var("OLLAMA_URL") {
        if !url.trim().is_empty() {
            validate_http_endpoint("OLLAMA_URL", &url)?;
            return Ok(url);
        }
    }
    if let Ok(port) = std::env::var("OLLAMA_PORT") {
        if !port.trim().is_empty() {
            let _ = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "OLLAMA_PORT",
                    reason: "expected u16 (1..=65535)",
                })?;
            return Ok(format!("http://localhost:{port}"));
        }
    }
    Err(LlmError::Config(ConfigError::MissingVar(
        "OLLAMA_URL or OLLAMA_PORT",
    )))
}

/// Constructs the **chat/generation** Gemini config.
///
/// Used for both pipeline stages (filter extraction and answer composition).
///
/// # Env
/// - `GEMINI_API_KEY` (required)
/// - `GEMINI_MODEL`, `GEMINI_URL`, `LLM_MAX_TOKENS` (optional)
///
/// # Defaults
/// - `temperature = Some(0.1)` (near-deterministic extraction)
/// - `timeout_secs = Some(60)`
pub fn config_gemini_chat() -> Result<LlmModelConfig, LlmError> {
    let api_key = must_env("GEMINI_API_KEY")?;
    let model = std::env::var("GEMINI_MODEL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| GEMINI_DEFAULT_MODEL.to_string());
    let endpoint = std::env::var("GEMINI_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| GEMINI_DEFAULT_URL.to_string());
    validate_http_endpoint("GEMINI_URL", &endpoint)?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Gemini,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(0.1),
        top_p: None,
        timeout_secs: Some(60),
    })
}

/// Constructs the **chat/generation** Ollama config (local alternative).
///
/// # Env
/// - `OLLAMA_MODEL` (required)
/// - `LLM_MAX_TOKENS` (optional)
///
/// # Defaults
/// - `temperature = Some(0.1)`
/// - `timeout_secs = Some(120)`
pub fn config_ollama_chat() -> Result<LlmModelConfig, LlmError> {
    let endpoint = ollama_endpoint()?;
    let model = must_env("OLLAMA_MODEL")?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Ollama,
        model,
        endpoint,
        api_key: None,
        max_tokens,
        temperature: Some(0.1),
        top_p: None,
        timeout_secs: Some(120),
    })
}

/// Constructs the **embedding** Ollama config.
///
/// Used to embed the user question before the similarity search.
///
/// # Env
/// - `EMBEDDING_MODEL` (required)
///
/// # Defaults
/// - `temperature = Some(0.0)` (deterministic)
/// - `max_tokens = None`
/// - `timeout_secs = Some(30)`
pub fn config_ollama_embedding() -> Result<LlmModelConfig, LlmError> {
    let endpoint = ollama_endpoint()?;
    let model = must_env("EMBEDDING_MODEL")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Ollama,
        model,
        endpoint,
        api_key: None,
        max_tokens: None,
        temperature: Some(0.0),
        top_p: None,
        timeout_secs: Some(30),
    })
}

/// Picks the chat config by `LLM_KIND` (`gemini` default, or `ollama`).
///
/// # Errors
/// - [`ConfigError::UnsupportedProvider`] for unknown kinds
/// - provider-specific env errors from the chosen constructor
pub fn config_chat_from_env() -> Result<LlmModelConfig, LlmError> {
    let kind = std::env::var("LLM_KIND").unwrap_or_else(|_| "gemini".into());
    match kind.trim().to_ascii_lowercase().as_str() {
        "gemini" => config_gemini_chat(),
        "ollama" => config_ollama_chat(),
        other => Err(ConfigError::UnsupportedProvider(other.to_string()).into()),
    }
}
