//! Re-ranker for lexical candidate scoring.
//!
//! Takes ANN candidates (base similarity score plus payload fields) and
//! applies field-weighted multiplicative boosts, word-coverage boosts and
//! a proper-name author boost, then rescales the batch by its maximum and
//! truncates to the top results.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use shelfx_core::{CatalogRecord, Field, ParsedQuery};

/// Result list length after re-ranking.
pub const MAX_RESULTS: usize = 10;

/// An ANN candidate entering the re-ranker.
#[derive(Debug, Clone)]
pub struct Hit {
    pub record: CatalogRecord,
    /// Base similarity score from the vector index.
    pub score: f32,
}

impl Hit {
    #[inline]
    #[must_use]
    pub fn new(record: CatalogRecord, score: f32) -> Self {
        Self { record, score }
    }
}

/// A re-ranked record with its batch-relative score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub record: CatalogRecord,
    pub score: f32,
}

/// Stateless re-ranker; one instance serves concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct ReRanker;

impl ReRanker {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Re-rank a candidate batch against the query.
    ///
    /// A blank query bypasses scoring entirely: every candidate comes back
    /// with score 1.0 in arrival order, untruncated. An empty batch yields
    /// an empty list.
    pub fn rerank(&self, query: &ParsedQuery, hits: Vec<Hit>) -> Vec<ScoredResult> {
        if query.is_blank() {
            return hits
                .into_iter()
                .map(|hit| ScoredResult {
                    record: hit.record,
                    score: 1.0,
                })
                .collect();
        }
        if hits.is_empty() {
            return Vec::new();
        }

        let query_lower = query.raw().to_lowercase();

        let mut results: Vec<ScoredResult> = hits
            .into_iter()
            .map(|hit| {
                let score = Self::boosted_score(&hit, query, &query_lower);
                ScoredResult {
                    record: hit.record,
                    score,
                }
            })
            .collect();

        // Rescale by the batch maximum so the best candidate lands at 1.0.
        // A zero maximum (all-degenerate batch) divides by 1 instead.
        let max_score = results.iter().map(|r| r.score).fold(0.0f32, f32::max);
        let denominator = if max_score > 0.0 { max_score } else { 1.0 };
        for result in &mut results {
            result.score /= denominator;
        }

        results.sort_by_key(|r| std::cmp::Reverse(OrderedFloat(r.score)));
        results.truncate(MAX_RESULTS);
        results
    }

    fn boosted_score(hit: &Hit, query: &ParsedQuery, query_lower: &str) -> f32 {
        let mut score = hit.score;
        let record = &hit.record;

        let field_lower = |field: Field| {
            record
                .field(field)
                .map(|v| v.to_lowercase())
                .unwrap_or_default()
        };

        // Exact-match boosts. Independently applicable: an exact title hit
        // also collects the title containment boost below.
        for (field, factor) in EXACT_BOOSTS {
            if field_lower(field) == query_lower {
                score *= factor;
            }
        }

        // Substring-containment boosts.
        for (field, factor) in CONTAINS_BOOSTS {
            if field_lower(field).contains(query_lower) {
                score *= factor;
            }
        }

        // Word-coverage boosts: the fraction of query words appearing as
        // substrings of some field word, scaled per field.
        let total_words = query.words().len();
        if total_words > 0 {
            for (field, factor) in COVERAGE_BOOSTS {
                let value = field_lower(field);
                let matched = Self::coverage(query.words(), &value);
                if matched > 0 {
                    score *= 1.0 + (matched as f32 / total_words as f32) * factor;
                }
            }
        }

        // Proper-name boost: when the query carries a capitalized name
        // candidate, reward authors containing its words.
        if let Some(name) = query.name_candidate() {
            let name_lower = name.to_lowercase();
            let author_lower = field_lower(Field::Author);
            let name_words: Vec<&str> = name_lower.split_whitespace().collect();
            let matched = name_words
                .iter()
                .filter(|w| author_lower.contains(**w))
                .count();
            if matched > 0 {
                score *= 1.0 + matched as f32 / name_words.len() as f32;
            }
        }

        score
    }

    /// How many query words are substrings of at least one field word.
    fn coverage(query_words: &[String], field_value: &str) -> usize {
        let field_words: Vec<&str> = field_value.split_whitespace().collect();
        query_words
            .iter()
            .filter(|qw| field_words.iter().any(|fw| fw.contains(qw.as_str())))
            .count()
    }
}

const EXACT_BOOSTS: [(Field, f32); 5] = [
    (Field::Title, 2.5),
    (Field::Author, 2.2),
    (Field::Format, 2.0),
    (Field::Category, 1.8),
    (Field::Theme, 1.8),
];

const CONTAINS_BOOSTS: [(Field, f32); 6] = [
    (Field::Title, 1.8),
    (Field::Author, 1.6),
    (Field::Description, 1.4),
    (Field::Format, 1.4),
    (Field::Category, 1.3),
    (Field::Theme, 1.3),
];

const COVERAGE_BOOSTS: [(Field, f32); 3] = [
    (Field::Title, 0.8),
    (Field::Description, 0.4),
    (Field::Author, 0.6),
];
