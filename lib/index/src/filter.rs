// Payload filtering for search requests.
use ahash::AHashSet;
use serde_json::Value;
use shelfx_core::Field;
use crate::point::{StoredPoint, SPARSE_INDICES_KEY};

/// A disjunctive payload filter condition, mirroring what the external
/// index accepts alongside a nearest-neighbor query.
#[derive(Debug, Clone)]
pub enum FilterCondition {
    /// Full-text match on one payload field: every word of `text` must
    /// appear among the field's words (both sides tokenized lowercase,
    /// the way the per-field text payload index is declared).
    Text { field: Field, text: String },
    /// Matches when the point's stored sparse indices intersect the set.
    SparseAny(Vec<u32>),
    /// All sub-conditions must hold.
    Must(Vec<FilterCondition>),
    /// At least one sub-condition must hold.
    Should(Vec<FilterCondition>),
}

impl FilterCondition {
    pub fn matches(&self, point: &StoredPoint) -> bool {
        match self {
            FilterCondition::Text { field, text } => {
                let value = point
                    .payload
                    .get(field.as_str())
                    .and_then(Value::as_str)
                    .unwrap_or("");
                text_match(text, value)
            }
            FilterCondition::SparseAny(indices) => {
                let wanted: AHashSet<u64> = indices.iter().map(|&i| u64::from(i)).collect();
                point
                    .payload
                    .get(SPARSE_INDICES_KEY)
                    .and_then(Value::as_array)
                    .map(|stored| {
                        stored
                            .iter()
                            .filter_map(Value::as_u64)
                            .any(|i| wanted.contains(&i))
                    })
                    .unwrap_or(false)
            }
            FilterCondition::Must(conditions) => conditions.iter().all(|c| c.matches(point)),
            FilterCondition::Should(conditions) => conditions.iter().any(|c| c.matches(point)),
        }
    }
}

/// Word-level text match: every token of the query text appears in the
/// field value's token set.
fn text_match(text: &str, value: &str) -> bool {
    let value_tokens: AHashSet<String> = tokenize_words(value).into_iter().collect();
    let query_tokens = tokenize_words(text);
    if query_tokens.is_empty() {
        return false;
    }
    query_tokens.iter().all(|t| value_tokens.contains(t))
}

fn tokenize_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}
