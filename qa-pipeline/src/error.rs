//! Typed errors for the qa-pipeline crate.

use thiserror::Error;

use crate::extract::ExtractError;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Filter extraction produced output that could not be parsed.
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Errors from the LLM service (generation or embedding).
    #[error("LLM error: {0}")]
    Llm(#[from] llm_service::LlmError),

    /// Errors from the vector store.
    #[error("store error: {0}")]
    Store(#[from] hotel_store::StoreError),
}
