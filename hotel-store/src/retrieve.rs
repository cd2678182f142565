//! Retrieval helpers: low-level vector search and document mapping.

use crate::config::StoreConfig;
use crate::embed::EmbeddingsProvider;
use crate::errors::StoreError;
use crate::filters::to_qdrant_filter;
use crate::qdrant_facade::QdrantFacade;
use crate::record::{HotelDoc, SearchQuery};

use qdrant_client::qdrant::Filter;
use std::collections::BTreeMap;
use tracing::trace;

/// Performs a low-level similarity search given a ready query vector.
///
/// # Errors
/// Returns `StoreError::Qdrant` on client failures.
pub async fn search_by_vector(
    client: &QdrantFacade,
    query_vector: Vec<f32>,
    top_k: u64,
    filter: Option<Filter>,
    exact: bool,
) -> Result<Vec<(f32, serde_json::Value)>, StoreError> {
    trace!("retrieve::search_by_vector top_k={top_k} exact={exact}");
    let res = client.search(query_vector, top_k, filter, exact).await?;
    Ok(res)
}

/// Embeds the query text and returns matching hotel documents.
///
/// An absent or empty filter results in an unfiltered similarity search.
///
/// # Errors
/// Returns embedding/provider errors or Qdrant failures.
pub async fn search_hotels(
    cfg: &StoreConfig,
    client: &QdrantFacade,
    query: SearchQuery<'_>,
    provider: &dyn EmbeddingsProvider,
) -> Result<Vec<HotelDoc>, StoreError> {
    trace!(
        "retrieve::search_hotels top_k={} filter={}",
        query.top_k,
        query.filter.is_some()
    );

    let qv = provider.embed(query.text).await?;
    let filter = query
        .filter
        .as_ref()
        .filter(|f| !f.is_empty())
        .map(to_qdrant_filter);

    let hits = search_by_vector(client, qv, query.top_k, filter, cfg.exact_search).await?;

    let mut out = Vec::with_capacity(hits.len());
    for (score, payload) in hits {
        out.push(doc_from_payload(score, payload));
    }

    trace!("retrieve::search_hotels hits={}", out.len());
    Ok(out)
}

/// Splits a stored payload into document content and metadata.
///
/// The free text lives under `content` (with `text` as a fallback key);
/// every other scalar field is metadata.
pub(crate) fn doc_from_payload(score: f32, payload: serde_json::Value) -> HotelDoc {
    let mut metadata = BTreeMap::new();
    let mut content = String::new();

    if let serde_json::Value::Object(map) = payload {
        for (k, v) in map {
            match k.as_str() {
                "content" => {
                    if let Some(s) = v.as_str() {
                        content = s.to_string();
                    }
                }
                "text" if content.is_empty() => {
                    if let Some(s) = v.as_str() {
                        content = s.to_string();
                    }
                }
                _ => {
                    if !v.is_null() {
                        metadata.insert(k, v);
                    }
                }
            }
        }
    }

    HotelDoc {
        score,
        content,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_splits_content_and_metadata() {
        let doc = doc_from_payload(
            0.87,
            json!({
                "content": "Khách sạn gần hồ Xuân Hương",
                "hotel_id": "H1",
                "location": "Đà Lạt",
                "rating": 4,
                "empty": null
            }),
        );
        assert_eq!(doc.content, "Khách sạn gần hồ Xuân Hương");
        assert_eq!(doc.metadata.get("location"), Some(&json!("Đà Lạt")));
        assert_eq!(doc.metadata.get("rating"), Some(&json!(4)));
        assert_eq!(doc.hotel_id().as_deref(), Some("H1"));
        // content key and nulls never leak into metadata
        assert!(!doc.metadata.contains_key("content"));
        assert!(!doc.metadata.contains_key("empty"));
    }

    #[test]
    fn text_key_is_a_fallback() {
        let doc = doc_from_payload(0.5, json!({"text": "mô tả", "hotel_id": 7}));
        assert_eq!(doc.content, "mô tả");
        assert_eq!(doc.hotel_id().as_deref(), Some("7"));
    }
}
