//! Core data models used by the library.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A retrieved hotel document: free-text content plus its stored metadata.
///
/// Several documents may carry the same `hotel_id` metadata value (duplicate
/// index entries for one hotel); grouping them is the summarizer's job.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HotelDoc {
    /// Similarity score (higher is closer).
    pub score: f32,
    /// Free-text description of the hotel.
    pub content: String,
    /// Stored metadata (address, rating, URL, hotel_id, ...).
    pub metadata: BTreeMap<String, Value>,
}

impl HotelDoc {
    /// Returns the hotel identifier from metadata, if present.
    ///
    /// Accepts both string and integer representations.
    pub fn hotel_id(&self) -> Option<String> {
        match self.metadata.get("hotel_id") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Query parameters for retrieval.
pub struct SearchQuery<'a> {
    /// Question text to embed.
    pub text: &'a str,
    /// Maximum number of documents to return.
    pub top_k: u64,
    /// Optional metadata constraints; `None` means unfiltered search.
    pub filter: Option<MetadataFilter>,
}

/// Exact-match metadata constraints. Every entry must match (AND semantics).
#[derive(Clone, Debug, Default)]
pub struct MetadataFilter {
    /// Exact match on a field, e.g. `("location", "Đà Lạt")`.
    pub equals: Vec<(String, Value)>,
}

impl MetadataFilter {
    pub fn is_empty(&self) -> bool {
        self.equals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hotel_id_reads_string_and_number() {
        let mut m = BTreeMap::new();
        m.insert("hotel_id".to_string(), json!("H1"));
        let doc = HotelDoc {
            score: 0.9,
            content: "Khách sạn ABC".into(),
            metadata: m.clone(),
        };
        assert_eq!(doc.hotel_id().as_deref(), Some("H1"));

        m.insert("hotel_id".to_string(), json!(42));
        let doc = HotelDoc {
            score: 0.9,
            content: String::new(),
            metadata: m,
        };
        assert_eq!(doc.hotel_id().as_deref(), Some("42"));
    }

    #[test]
    fn hotel_id_absent() {
        let doc = HotelDoc {
            score: 0.1,
            content: String::new(),
            metadata: BTreeMap::new(),
        };
        assert!(doc.hotel_id().is_none());
    }
}
