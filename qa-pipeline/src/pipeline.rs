//! The two-stage controller: `retrieve` → `generate`.
//!
//! Stage one extracts filters and queries the vector store; its output is an
//! explicit [`Retrieved`] value consumed by stage two. No shared mutable
//! state, no branching between stages, no retries — errors propagate to the
//! service boundary.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use hotel_store::{HotelStore, SearchQuery};
use llm_service::LlmServiceProfiles;

use crate::cfg::PipelineConfig;
use crate::compose::{build_compose_prompt, build_context_block, no_results_answer};
use crate::embedding::ProfilesEmbedder;
use crate::error::PipelineError;
use crate::extract::{HotelFilter, build_extract_prompt, parse_filter};

/// Output of the first stage, input of the second.
pub struct Retrieved {
    /// Similarity-ranked documents, closest first, at most `top_k`.
    pub context: Vec<hotel_store::HotelDoc>,
    /// The filter map the extraction step detected.
    pub meta: HotelFilter,
}

/// Final pipeline result.
pub struct QaOutcome {
    /// Natural-language answer (summary or fixed apology).
    pub answer: String,
    /// Extracted filter map, for transparency/logging.
    pub meta: HotelFilter,
    /// Number of documents the summary was built from.
    pub matched: usize,
}

/// Stage one: extract a filter map from the question and retrieve context.
///
/// An empty filter map still triggers an unfiltered similarity search.
///
/// # Errors
/// Propagates extraction, LLM, and store errors.
#[instrument(skip_all, fields(question_len = question.len()))]
pub async fn retrieve(
    svc: Arc<LlmServiceProfiles>,
    store: &HotelStore,
    cfg: &PipelineConfig,
    question: &str,
) -> Result<Retrieved, PipelineError> {
    let prompt = build_extract_prompt(question);
    let raw = svc.generate(&prompt).await?;
    let meta = parse_filter(&raw)?;

    debug!(filtered = !meta.is_empty(), top_k = cfg.top_k, "running similarity search");

    let embedder = ProfilesEmbedder::new(svc);
    let query = SearchQuery {
        text: question,
        top_k: cfg.top_k,
        filter: meta.to_metadata_filter(),
    };
    let context = store.search(query, &embedder).await?;

    info!(hits = context.len(), "retrieval stage complete");
    Ok(Retrieved { context, meta })
}

/// Stage two: compose the final answer from retrieved context.
///
/// The empty-context branch returns the fixed apology without calling the
/// model; otherwise the model reply is returned verbatim.
///
/// # Errors
/// Propagates LLM errors from the composition call.
#[instrument(skip_all, fields(hits = retrieved.context.len()))]
pub async fn generate(
    svc: Arc<LlmServiceProfiles>,
    retrieved: &Retrieved,
) -> Result<String, PipelineError> {
    if retrieved.context.is_empty() {
        info!("no documents retrieved, returning fixed apology");
        return Ok(no_results_answer(&retrieved.meta));
    }

    let context_block = build_context_block(&retrieved.context);
    let prompt = build_compose_prompt(&context_block);
    let answer = svc.generate(&prompt).await?;

    info!(answer_len = answer.len(), "composition stage complete");
    Ok(answer)
}

/// Runs the full pipeline for one question.
///
/// Always produces an answer on success: either a synthesized summary or the
/// "no results" apology.
///
/// # Errors
/// Propagates any stage error unchanged.
pub async fn answer_question(
    svc: Arc<LlmServiceProfiles>,
    store: &HotelStore,
    cfg: &PipelineConfig,
    question: &str,
) -> Result<QaOutcome, PipelineError> {
    let retrieved = retrieve(svc.clone(), store, cfg, question).await?;
    let answer = generate(svc, &retrieved).await?;

    Ok(QaOutcome {
        answer,
        matched: retrieved.context.len(),
        meta: retrieved.meta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_service::{LlmModelConfig, LlmProvider};

    // Profiles pointing at a closed port: any model call would fail fast,
    // so a successful result proves no call was made.
    fn dead_profiles() -> Arc<LlmServiceProfiles> {
        let chat = LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "test".into(),
            endpoint: "http://127.0.0.1:9".into(),
            api_key: None,
            max_tokens: None,
            temperature: Some(0.1),
            top_p: None,
            timeout_secs: Some(1),
        };
        let embedding = chat.clone();
        Arc::new(LlmServiceProfiles::new(chat, embedding, Some(1)).unwrap())
    }

    #[tokio::test]
    async fn empty_context_yields_apology_without_model_call() {
        let meta =
            crate::extract::parse_filter("{\"location\": \"Đà Lạt\", \"rating\": 4}").unwrap();
        let retrieved = Retrieved {
            context: Vec::new(),
            meta,
        };

        let answer = generate(dead_profiles(), &retrieved).await.unwrap();
        assert_eq!(
            answer,
            "Xin lỗi, hệ thống không tìm thấy khách sạn nào ở Đà Lạt với rating 4. Vui lòng chọn lại rating khác."
        );
    }
}
