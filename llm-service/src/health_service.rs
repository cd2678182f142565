//! Universal health service for LLM backends (Gemini, Ollama).
//!
//! Lightweight health checks for supported providers:
//! - Ollama: `GET {endpoint}/api/tags` (best-effort model existence check)
//! - Gemini: `GET {endpoint}/v1beta/models` with API-key header
//!
//! The returned [`HealthStatus`] is JSON-serializable. [`HealthService::check`]
//! is resilient and never fails (errors mapped to `ok=false`). Provider-specific
//! probes (`try_*`) return strict `Result`.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::llm_model_config::LlmModelConfig;
use crate::config::llm_provider::LlmProvider;
use crate::error_handler::{HealthError, LlmError, make_snippet};

/// A serializable health snapshot for a single provider/config.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Backend/provider (e.g., "Gemini", "Ollama").
    pub provider: String,
    /// Target endpoint base URL.
    pub endpoint: String,
    /// Optional model identifier relevant to the probe (if any).
    pub model: Option<String>,
    /// Overall health flag.
    pub ok: bool,
    /// Measured HTTP latency in milliseconds for the main probe.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

impl HealthStatus {
    #[inline]
    fn ok(
        provider: LlmProvider,
        endpoint: &str,
        model: Option<&str>,
        latency_ms: u128,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider: format!("{provider:?}"),
            endpoint: endpoint.to_string(),
            model: model.map(str::to_string),
            ok: true,
            latency_ms,
            message: message.into(),
        }
    }

    #[inline]
    fn fail(
        provider: LlmProvider,
        endpoint: &str,
        model: Option<&str>,
        latency_ms: u128,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider: format!("{provider:?}"),
            endpoint: endpoint.to_string(),
            model: model.map(str::to_string),
            ok: false,
            latency_ms,
            message: message.into(),
        }
    }
}

/// A universal health checker that reuses a single HTTP client.
pub struct HealthService {
    client: reqwest::Client,
}

impl HealthService {
    /// Creates a new health service with an optional client timeout (seconds).
    ///
    /// # Errors
    /// Returns [`LlmError::HttpTransport`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, LlmError> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(10));
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        debug!(
            default_timeout_secs = timeout.as_secs(),
            "HealthService initialized"
        );

        Ok(Self { client })
    }

    /// Checks one config, never failing: probe errors become `ok=false`.
    pub async fn check(&self, cfg: &LlmModelConfig) -> HealthStatus {
        let started = Instant::now();
        let result = match cfg.provider {
            LlmProvider::Ollama => self.try_ollama(cfg).await,
            LlmProvider::Gemini => self.try_gemini(cfg).await,
        };
        let latency = started.elapsed().as_millis();

        match result {
            Ok(message) => {
                info!(provider = ?cfg.provider, endpoint = %cfg.endpoint, latency_ms = latency, "health ok");
                HealthStatus::ok(cfg.provider, &cfg.endpoint, Some(&cfg.model), latency, message)
            }
            Err(e) => {
                warn!(provider = ?cfg.provider, endpoint = %cfg.endpoint, error = %e, "health check failed");
                HealthStatus::fail(
                    cfg.provider,
                    &cfg.endpoint,
                    Some(&cfg.model),
                    latency,
                    e.to_string(),
                )
            }
        }
    }

    /// Checks a list of configs sequentially.
    pub async fn check_many(&self, cfgs: &[LlmModelConfig]) -> Vec<HealthStatus> {
        let mut out = Vec::with_capacity(cfgs.len());
        for cfg in cfgs {
            out.push(self.check(cfg).await);
        }
        out
    }

    /// Strict Ollama probe: `GET {endpoint}/api/tags`.
    ///
    /// # Errors
    /// - [`HealthError::InvalidEndpoint`] for malformed endpoints
    /// - [`HealthError::HttpStatus`] for non-2xx responses
    async fn try_ollama(&self, cfg: &LlmModelConfig) -> Result<String, LlmError> {
        let base = valid_base(&cfg.endpoint)?;
        let url = format!("{base}/api/tags");

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(HealthError::HttpStatus {
                status,
                url,
                snippet: make_snippet(&text),
            }
            .into());
        }
        Ok("ollama reachable".into())
    }

    /// Strict Gemini probe: `GET {endpoint}/v1beta/models` with the API key.
    ///
    /// # Errors
    /// - [`HealthError::InvalidEndpoint`] for malformed endpoints
    /// - [`HealthError::HttpStatus`] for non-2xx responses (bad key included)
    async fn try_gemini(&self, cfg: &LlmModelConfig) -> Result<String, LlmError> {
        let base = valid_base(&cfg.endpoint)?;
        let url = format!("{base}/v1beta/models");
        let key = cfg.api_key.as_deref().unwrap_or_default();

        let resp = self
            .client
            .get(&url)
            .header("x-goog-api-key", key)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(HealthError::HttpStatus {
                status,
                url,
                snippet: make_snippet(&text),
            }
            .into());
        }
        Ok("gemini reachable".into())
    }
}

fn valid_base(endpoint: &str) -> Result<String, LlmError> {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() || !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(HealthError::InvalidEndpoint(endpoint.to_string()).into());
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
