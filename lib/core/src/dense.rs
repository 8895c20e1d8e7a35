//! Dense topic vectorization.
//!
//! Scores a record against every topic with weighted keyword/field
//! heuristics, then L2-normalizes the result. One dimension per topic, in
//! vocabulary order.

use crate::record::{CatalogRecord, Field};
use crate::vector::DenseVector;
use crate::vocab::{Topic, TopicVocabulary};
use crate::{fuzzy, text};

/// Per-token bonus multiplier when the field itself names the topic, or a
/// category/theme value is literally one of the topic's keywords.
const FIELD_TOPIC_BONUS: f32 = 1.5;

pub struct DenseVectorizer<'a> {
    vocab: &'a TopicVocabulary,
}

impl<'a> DenseVectorizer<'a> {
    #[inline]
    #[must_use]
    pub fn new(vocab: &'a TopicVocabulary) -> Self {
        Self { vocab }
    }

    /// Vectorize one record. The output dimension always equals the topic
    /// count; the vector is unit-norm unless no token matched any topic.
    pub fn vectorize(&self, record: &CatalogRecord) -> DenseVector {
        let scores: Vec<f32> = self
            .vocab
            .topics()
            .iter()
            .map(|topic| self.topic_score(topic, record))
            .collect();

        let mut vector = DenseVector::new(scores);
        vector.normalize();
        vector
    }

    fn topic_score(&self, topic: &Topic, record: &CatalogRecord) -> f32 {
        let mut total = 0.0f32;

        for (field, value) in record.populated_fields() {
            let weight = field.dense_weight();
            let value_lower = value.to_lowercase();
            let words = text::expand(value, field.is_author());

            for word in &words {
                if topic.contains(word) {
                    total += weight;
                } else if Self::field_names_topic(field, topic, &value_lower) {
                    total += weight * FIELD_TOPIC_BONUS;
                } else if let Some(quality) =
                    fuzzy::best_match(word, topic.keywords().iter().map(|k| k.as_str()))
                {
                    total += weight * quality;
                }
            }
        }

        total
    }

    /// The field-level bonus condition, checked per token: a field named
    /// after the topic (the `format` field against the `format` topic), or
    /// a category/theme whose whole value is one of the topic's keywords.
    fn field_names_topic(field: Field, topic: &Topic, value_lower: &str) -> bool {
        if field.as_str() == topic.name() {
            return true;
        }
        matches!(field, Field::Category | Field::Theme) && topic.contains(value_lower)
    }
}
