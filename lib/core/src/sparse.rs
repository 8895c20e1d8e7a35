//! Sparse keyword vectorization.
//!
//! Builds a deduplicated (index, weight) list over the flattened global
//! vocabulary per field, merges fields by keeping the maximum weight per
//! index, then L2-normalizes the merged values.

use ahash::{AHashMap, AHashSet};
use crate::record::{CatalogRecord, Field};
use crate::vector::SparseVector;
use crate::vocab::TopicVocabulary;
use crate::{fuzzy, text};

/// Tokens from this set carry half importance.
const STOP_WORDS: [&str; 10] = ["the", "and", "or", "in", "on", "at", "to", "for", "of", "with"];

/// Token length saturates its importance boost at this factor.
const LENGTH_BOOST_CAP: f32 = 1.5;

pub struct SparseVectorizer<'a> {
    vocab: &'a TopicVocabulary,
}

impl<'a> SparseVectorizer<'a> {
    #[inline]
    #[must_use]
    pub fn new(vocab: &'a TopicVocabulary) -> Self {
        Self { vocab }
    }

    /// Vectorize one record. The result's indices are unique positions into
    /// the flat vocabulary and its values are L2-normalized.
    pub fn vectorize(&self, record: &CatalogRecord) -> SparseVector {
        let mut indices: Vec<u32> = Vec::new();
        let mut values: Vec<f32> = Vec::new();
        let mut slot_of: AHashMap<u32, usize> = AHashMap::new();

        for (field, value) in record.populated_fields() {
            let weight = field.sparse_weight();
            for (index, component) in self.field_components(value, field) {
                match slot_of.get(&index) {
                    None => {
                        slot_of.insert(index, indices.len());
                        indices.push(index);
                        values.push(component * weight);
                    }
                    Some(&slot) => {
                        // Max-merge across fields, never a sum.
                        values[slot] = values[slot].max(component * weight);
                    }
                }
            }
        }

        let mut vector = SparseVector::new(indices, values);
        vector.normalize();
        vector
    }

    /// Per-field components: importance-weighted token frequencies,
    /// normalized by the field's maximum, spread onto every similar
    /// vocabulary entry with at most one contribution per index.
    fn field_components(&self, value: &str, field: Field) -> Vec<(u32, f32)> {
        let words = text::expand(value, field.is_author());

        let mut frequencies: Vec<(String, f32)> = Vec::with_capacity(words.len());
        for word in words {
            let importance = Self::token_importance(&word, field);
            frequencies.push((word, importance));
        }

        let max_frequency = frequencies.iter().map(|(_, f)| *f).fold(0.0f32, f32::max);
        let max_frequency = if max_frequency > 0.0 { max_frequency } else { 1.0 };

        let mut components = Vec::new();
        let mut seen: AHashSet<u32> = AHashSet::new();

        for (word, frequency) in &frequencies {
            for (position, vocab_word) in self.vocab.flat().iter().enumerate() {
                if !fuzzy::similar(word, vocab_word) {
                    continue;
                }
                let index = position as u32;
                if !seen.insert(index) {
                    continue;
                }
                let quality = fuzzy::match_quality(word, vocab_word);
                components.push((index, frequency * quality / max_frequency));
            }
        }

        components
    }

    /// Importance of one token inside one field: the field's token weight,
    /// boosted by token length (capped) and halved for stop words.
    fn token_importance(word: &str, field: Field) -> f32 {
        let length_boost = (word.chars().count() as f32 / 5.0).min(LENGTH_BOOST_CAP);
        let stop_penalty = if STOP_WORDS.contains(&word) { 0.5 } else { 1.0 };
        field.token_importance() * length_boost * stop_penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, description: &str, author: &str) -> CatalogRecord {
        CatalogRecord {
            id: 1,
            title: title.to_string(),
            description: description.to_string(),
            author: author.to_string(),
            category: None,
            theme: None,
            format: None,
        }
    }

    #[test]
    fn test_indices_unique() {
        let vocab = TopicVocabulary::standard();
        let vectorizer = SparseVectorizer::new(&vocab);
        // "guide" sits in two topics and appears in two fields here; the
        // merged vector must still carry each index once.
        let v = vectorizer.vectorize(&record(
            "A Guide to Programming Guides",
            "comprehensive guide to software and coding",
            "John Smith",
        ));
        let mut sorted = v.indices().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), v.indices().len());
    }

    #[test]
    fn test_values_normalized() {
        let vocab = TopicVocabulary::standard();
        let vectorizer = SparseVectorizer::new(&vocab);
        let v = vectorizer.vectorize(&record("Quantum Physics", "science research", "Sarah Chen"));
        assert!(!v.is_empty());
        assert!((v.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_unmatched_text_yields_empty_vector() {
        let vocab = TopicVocabulary::standard();
        let vectorizer = SparseVectorizer::new(&vocab);
        let v = vectorizer.vectorize(&record("Zzq Xwv", "qqz", "Qz Xw"));
        assert!(v.is_empty());
    }

    #[test]
    fn test_stop_words_carry_less_weight() {
        let vocab = TopicVocabulary::standard();
        let vectorizer = SparseVectorizer::new(&vocab);

        // "for" is a stop word but still a 3-char token; compare against a
        // non-stop token of the same length hitting the same rule set.
        let stop = SparseVectorizer::token_importance("for", Field::Title);
        let plain = SparseVectorizer::token_importance("art", Field::Title);
        assert!((stop - plain * 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_length_boost_saturates() {
        let short = SparseVectorizer::token_importance("ai", Field::Title);
        let long = SparseVectorizer::token_importance("comprehensive", Field::Title);
        assert!((short - 3.0 * (2.0 / 5.0)).abs() < 1e-6);
        assert!((long - 3.0 * 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_max_merge_prefers_strongest_field() {
        let vocab = TopicVocabulary::standard();
        let vectorizer = SparseVectorizer::new(&vocab);

        // "physics" appears in title (merge weight 2.5) and description
        // (merge weight 1.5); "quantum" only in the description. Each
        // field's normalized frequency for its exact-match tokens is 1.0,
        // so with max-merge the stored ratio is 2.5 : 1.5 - a sum would
        // have produced 4.0 : 1.5.
        let v = vectorizer.vectorize(&record("physics", "physics quantum", "Zzq Xwv"));

        let value_of = |keyword: &str| {
            let index = vocab.index_of(keyword).unwrap();
            v.indices()
                .iter()
                .position(|&i| i == index)
                .map(|p| v.values()[p])
                .unwrap()
        };
        let ratio = value_of("physics") / value_of("quantum");
        assert!((ratio - 2.5 / 1.5).abs() < 1e-5);
    }
}
