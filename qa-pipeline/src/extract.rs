//! Filter extraction: prompt the chat model for `{location, rating, hotel_name}`
//! and parse its reply as strict JSON.
//!
//! Model output is treated as an untrusted external format: Markdown code
//! fences are stripped first, then the JSON shape is validated explicitly.
//! A parse failure is a typed [`ExtractError`], never a panic.

use serde::Deserialize;
use serde_json::{Number, Value};
use thiserror::Error;
use tracing::debug;

use hotel_store::MetadataFilter;

/// Errors produced while turning model output into a [`HotelFilter`].
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The model reply was not valid JSON even after fence-stripping.
    #[error("model output is not valid JSON: {source}; output started with: {snippet}")]
    InvalidJson {
        /// First characters of the (fence-stripped) reply, for logs.
        snippet: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Structured search constraints extracted from a free-text question.
///
/// Present fields are guaranteed non-empty after [`parse_filter`]; absent
/// attributes are `None` and never serialize to JSON null downstream.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct HotelFilter {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub rating: Option<Number>,
    #[serde(default)]
    pub hotel_name: Option<String>,
}

impl HotelFilter {
    /// True when no attribute was detected.
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.rating.is_none() && self.hotel_name.is_none()
    }

    /// Converts present attributes into store filter conditions.
    ///
    /// Returns `None` when the filter is empty so the retrieval stage runs
    /// an unfiltered similarity search.
    pub fn to_metadata_filter(&self) -> Option<MetadataFilter> {
        let mut equals: Vec<(String, Value)> = Vec::new();
        if let Some(loc) = &self.location {
            equals.push(("location".into(), Value::String(loc.clone())));
        }
        if let Some(rating) = &self.rating {
            equals.push(("rating".into(), Value::Number(rating.clone())));
        }
        if let Some(name) = &self.hotel_name {
            equals.push(("hotel_name".into(), Value::String(name.clone())));
        }
        if equals.is_empty() {
            None
        } else {
            Some(MetadataFilter { equals })
        }
    }

    /// Location for the apology template; absent renders as empty string.
    pub fn location_str(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    /// Rating for the apology template; absent renders as empty string.
    pub fn rating_str(&self) -> String {
        self.rating
            .as_ref()
            .map(|n| n.to_string())
            .unwrap_or_default()
    }
}

/// Builds the Vietnamese extraction prompt for a question.
pub fn build_extract_prompt(question: &str) -> String {
    format!(
        "Tìm các thông tin location, rating, hotel_name (nếu có) trong câu: {question}.\n\
         Nếu không có thông tin thì loại bỏ biến đó khỏi kết quả.\n\
         Trả về JSON chỉ chứa các key có giá trị, theo format sau:\n\
         {{\"location\": \"string\", \"rating\": int, \"hotel_name\": \"string\"}}"
    )
}

/// Removes Markdown code-fence wrapping (```json ... ```) from a model reply.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parses a model reply into a validated [`HotelFilter`].
///
/// Null and empty-string attributes are dropped, honoring the invariant that
/// a present key always carries a non-empty value.
///
/// # Errors
/// Returns [`ExtractError::InvalidJson`] when the fence-stripped reply is not
/// valid JSON of the expected shape.
pub fn parse_filter(raw: &str) -> Result<HotelFilter, ExtractError> {
    let cleaned = strip_code_fences(raw);
    let mut filter: HotelFilter =
        serde_json::from_str(&cleaned).map_err(|source| ExtractError::InvalidJson {
            snippet: cleaned.chars().take(120).collect(),
            source,
        })?;

    // Normalize: whitespace-only strings count as absent.
    if filter.location.as_deref().is_some_and(|s| s.trim().is_empty()) {
        filter.location = None;
    }
    if filter
        .hotel_name
        .as_deref()
        .is_some_and(|s| s.trim().is_empty())
    {
        filter.hotel_name = None;
    }

    debug!(
        location = filter.location.as_deref().unwrap_or(""),
        rating = %filter.rating_str(),
        hotel_name = filter.hotel_name.as_deref().unwrap_or(""),
        "extracted filter"
    );
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_json() {
        let raw = "```json\n{\"location\": \"Đà Lạt\", \"rating\": 4}\n```";
        let f = parse_filter(raw).unwrap();
        assert_eq!(f.location.as_deref(), Some("Đà Lạt"));
        assert_eq!(f.rating, Some(Number::from(4)));
        assert!(f.hotel_name.is_none());
    }

    #[test]
    fn parses_plain_json() {
        let f = parse_filter("{\"hotel_name\": \"Dalat Palace\"}").unwrap();
        assert_eq!(f.hotel_name.as_deref(), Some("Dalat Palace"));
        assert!(f.location.is_none());
    }

    #[test]
    fn null_and_empty_fields_are_dropped() {
        let f = parse_filter("{\"location\": null, \"hotel_name\": \"  \", \"rating\": 4.5}")
            .unwrap();
        assert!(f.location.is_none());
        assert!(f.hotel_name.is_none());
        assert_eq!(f.rating.and_then(|n| n.as_f64()), Some(4.5));
    }

    #[test]
    fn invalid_json_is_a_typed_error() {
        let err = parse_filter("Xin lỗi, tôi không thể trả lời.").unwrap_err();
        match err {
            ExtractError::InvalidJson { snippet, .. } => {
                assert!(snippet.starts_with("Xin lỗi"));
            }
        }
    }

    #[test]
    fn empty_object_means_unfiltered_search() {
        let f = parse_filter("{}").unwrap();
        assert!(f.is_empty());
        assert!(f.to_metadata_filter().is_none());
    }

    #[test]
    fn metadata_filter_carries_all_present_keys() {
        let f = parse_filter(
            "{\"location\": \"Huế\", \"rating\": 4, \"hotel_name\": \"Hương Giang\"}",
        )
        .unwrap();
        let mf = f.to_metadata_filter().unwrap();
        assert_eq!(mf.equals.len(), 3);
        // No key is ever present with a null value.
        assert!(mf.equals.iter().all(|(_, v)| !v.is_null()));
    }

    #[test]
    fn prompt_embeds_the_question() {
        let p = build_extract_prompt("Tôi muốn tìm khách sạn 4 sao");
        assert!(p.contains("Tôi muốn tìm khách sạn 4 sao"));
        assert!(p.contains("location, rating, hotel_name"));
    }
}
