//! Filter conversion to Qdrant `Filter`.
//!
//! Exact equality on scalar fields. Every present key becomes a `must`
//! condition: a document matches only when all extracted filter values match.

use crate::record::MetadataFilter;
use qdrant_client::qdrant::{
    Condition, FieldCondition, Filter, Match, Range, condition::ConditionOneOf,
    r#match::MatchValue,
};
use tracing::debug;

/// Converts [`MetadataFilter`] to Qdrant [`Filter`] with AND semantics.
///
/// Supported value types:
/// - `String`  → `Keyword` match
/// - integral `Number` → `Integer` match
/// - fractional `Number` → degenerate `Range` (`gte == lte`), since Qdrant
///   has no direct double equality match
/// - `Bool`    → `Boolean` match
///
/// Unsupported types (arrays, objects, null) are skipped.
pub fn to_qdrant_filter(f: &MetadataFilter) -> Filter {
    debug!("filters::to_qdrant_filter equals={}", f.equals.len());

    let mut must: Vec<Condition> = Vec::new();

    for (field, val) in &f.equals {
        let condition = match val {
            serde_json::Value::String(s) => field_match(field, MatchValue::Keyword(s.clone())),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    field_match(field, MatchValue::Integer(i))
                } else if let Some(x) = n.as_f64() {
                    field_range(field, x)
                } else {
                    continue;
                }
            }
            serde_json::Value::Bool(b) => field_match(field, MatchValue::Boolean(*b)),
            _ => continue, // skip unsupported types
        };
        must.push(condition);
    }

    Filter {
        must,
        ..Default::default()
    }
}

fn field_match(field: &str, value: MatchValue) -> Condition {
    Condition {
        condition_one_of: Some(ConditionOneOf::Field(FieldCondition {
            key: field.to_string(),
            r#match: Some(Match {
                match_value: Some(value),
            }),
            ..Default::default()
        })),
    }
}

fn field_range(field: &str, value: f64) -> Condition {
    Condition {
        condition_one_of: Some(ConditionOneOf::Field(FieldCondition {
            key: field.to_string(),
            range: Some(Range {
                gte: Some(value),
                lte: Some(value),
                ..Default::default()
            }),
            ..Default::default()
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key_of(c: &Condition) -> &str {
        match c.condition_one_of.as_ref().unwrap() {
            ConditionOneOf::Field(f) => f.key.as_str(),
            _ => panic!("expected field condition"),
        }
    }

    #[test]
    fn all_keys_become_must_conditions() {
        let f = MetadataFilter {
            equals: vec![
                ("location".into(), json!("Đà Lạt")),
                ("rating".into(), json!(4)),
            ],
        };
        let qf = to_qdrant_filter(&f);
        assert_eq!(qf.must.len(), 2);
        assert!(qf.should.is_empty());
        assert_eq!(key_of(&qf.must[0]), "location");
        assert_eq!(key_of(&qf.must[1]), "rating");
    }

    #[test]
    fn fractional_rating_uses_degenerate_range() {
        let f = MetadataFilter {
            equals: vec![("rating".into(), json!(4.5))],
        };
        let qf = to_qdrant_filter(&f);
        assert_eq!(qf.must.len(), 1);
        match qf.must[0].condition_one_of.as_ref().unwrap() {
            ConditionOneOf::Field(fc) => {
                let range = fc.range.as_ref().expect("range condition");
                assert_eq!(range.gte, Some(4.5));
                assert_eq!(range.lte, Some(4.5));
            }
            _ => panic!("expected field condition"),
        }
    }

    #[test]
    fn unsupported_values_are_skipped() {
        let f = MetadataFilter {
            equals: vec![
                ("tags".into(), json!(["a", "b"])),
                ("location".into(), json!("Huế")),
            ],
        };
        let qf = to_qdrant_filter(&f);
        assert_eq!(qf.must.len(), 1);
    }
}
