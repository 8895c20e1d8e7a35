//! The combined vectorization surface handed to the calling layer.

use rayon::prelude::*;
use crate::dense::DenseVectorizer;
use crate::record::CatalogRecord;
use crate::sparse::SparseVectorizer;
use crate::vector::{DenseVector, SparseVector};
use crate::vocab::TopicVocabulary;

/// Owns the vocabulary and produces both vector kinds for a record. Pure
/// and stateless over its inputs; safe to share across threads.
#[derive(Debug, Clone)]
pub struct Vectorizer {
    vocab: TopicVocabulary,
}

impl Vectorizer {
    #[inline]
    #[must_use]
    pub fn new(vocab: TopicVocabulary) -> Self {
        Self { vocab }
    }

    #[inline]
    #[must_use]
    pub fn standard() -> Self {
        Self::new(TopicVocabulary::standard())
    }

    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &TopicVocabulary {
        &self.vocab
    }

    /// Dense vector dimensionality, fixed by the vocabulary.
    #[inline]
    #[must_use]
    pub fn dense_dim(&self) -> usize {
        self.vocab.topic_count()
    }

    /// Vectorize one record into its dense/sparse pair.
    pub fn vectorize(&self, record: &CatalogRecord) -> (DenseVector, SparseVector) {
        let dense = DenseVectorizer::new(&self.vocab).vectorize(record);
        let sparse = SparseVectorizer::new(&self.vocab).vectorize(record);
        (dense, sparse)
    }

    /// Vectorize a batch in parallel. Records are independent, so this is
    /// a plain parallel map with no ordering requirement beyond keeping
    /// output aligned with input.
    pub fn vectorize_batch(&self, records: &[CatalogRecord]) -> Vec<(DenseVector, SparseVector)> {
        records.par_iter().map(|r| self.vectorize(r)).collect()
    }
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, title: &str) -> CatalogRecord {
        CatalogRecord {
            id,
            title: title.to_string(),
            description: String::new(),
            author: String::new(),
            category: None,
            theme: None,
            format: None,
        }
    }

    #[test]
    fn test_vectorize_pair() {
        let vectorizer = Vectorizer::standard();
        let (dense, sparse) = vectorizer.vectorize(&record(1, "Quantum Physics for Beginners"));
        assert_eq!(dense.dim(), vectorizer.dense_dim());
        assert!(!sparse.is_empty());
    }

    #[test]
    fn test_batch_matches_single() {
        let vectorizer = Vectorizer::standard();
        let records = vec![
            record(1, "The Art of Programming"),
            record(2, "Sustainable Gardening"),
            record(3, "Financial Freedom"),
        ];
        let batch = vectorizer.vectorize_batch(&records);
        assert_eq!(batch.len(), records.len());
        for (record, pair) in records.iter().zip(&batch) {
            assert_eq!(*pair, vectorizer.vectorize(record));
        }
    }
}
