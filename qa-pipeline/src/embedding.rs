//! Adapter exposing the LLM service's embedding profile to the store.

use std::sync::Arc;
use std::{future::Future, pin::Pin};

use hotel_store::{EmbeddingsProvider, StoreError};
use llm_service::LlmServiceProfiles;

/// Embeds text through the shared [`LlmServiceProfiles`] embedding profile.
pub struct ProfilesEmbedder {
    svc: Arc<LlmServiceProfiles>,
}

impl ProfilesEmbedder {
    pub fn new(svc: Arc<LlmServiceProfiles>) -> Self {
        Self { svc }
    }
}

impl EmbeddingsProvider for ProfilesEmbedder {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, StoreError>> + Send + 'a>> {
        let svc = self.svc.clone();
        Box::pin(async move {
            svc.embed(text)
                .await
                .map_err(|e| StoreError::Embedding(e.to_string()))
        })
    }
}
