//! Shared LLM client layer with two active profiles: `chat` and `embedding`.
//!
//! Providers:
//! - **Gemini** (Google Generative AI, `generateContent`) — text generation
//! - **Ollama** (`/api/generate`, `/api/embeddings`) — local generation and embeddings
//!
//! Construct [`service_profiles::LlmServiceProfiles`] once, wrap it in `Arc`,
//! and share clones. HTTP clients are cached per config.

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod service_profiles;
pub mod services;

pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::{ConfigError, LlmError};
pub use service_profiles::LlmServiceProfiles;
