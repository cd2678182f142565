use std::sync::Arc;

use hotel_store::HotelStore;
use llm_service::config::default_config::{config_chat_from_env, config_ollama_embedding};
use llm_service::service_profiles::LlmServiceProfiles;
use qa_pipeline::PipelineConfig;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared LLM service (chat + embedding profiles).
    pub svc: Arc<LlmServiceProfiles>,
    /// Qdrant-backed hotel retrieval.
    pub store: Arc<HotelStore>,
    /// Pipeline knobs (top_k, collection, ...).
    pub pipeline_cfg: PipelineConfig,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] when a required variable is missing or
    /// malformed, and [`AppError::Store`] when the Qdrant client cannot be
    /// initialized.
    pub fn from_env() -> Result<Self, AppError> {
        let chat = config_chat_from_env()?;
        let embedding = config_ollama_embedding()?;
        let svc = Arc::new(LlmServiceProfiles::new(chat, embedding, Some(10))?);

        let pipeline_cfg = PipelineConfig::from_env();
        let store = Arc::new(HotelStore::new(pipeline_cfg.make_store_config())?);

        Ok(Self {
            svc,
            store,
            pipeline_cfg,
        })
    }
}
