//! Catalog service: the calling layer above the engine.
//!
//! Owns the wiring between vectorization, the index boundary and the
//! re-ranker. Transport, retry/backoff toward a remote index and response
//! shaping live with whatever hosts this service, not here.

use thiserror::Error;
use tracing::{debug, info};

use shelfx_core::{CatalogRecord, ParsedQuery, Vectorizer};
use shelfx_index::{
    FilterCondition, SearchRequest, StoredPoint, VectorIndex, DEFAULT_CANDIDATE_LIMIT,
};
use shelfx_rank::{Hit, ReRanker, ScoredResult};

use crate::sample;

/// Name of the catalog collection in the index.
pub const COLLECTION: &str = "catalog";

/// Page size for full listings.
const SCROLL_LIMIT: usize = 100;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Engine(#[from] shelfx_core::Error),

    #[error(transparent)]
    Index(#[from] shelfx_index::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Catalog ingestion and search over any [`VectorIndex`] implementation.
pub struct CatalogService<I: VectorIndex> {
    index: I,
    vectorizer: Vectorizer,
    reranker: ReRanker,
}

impl<I: VectorIndex> CatalogService<I> {
    /// Service over the standard topic vocabulary.
    #[must_use]
    pub fn new(index: I) -> Self {
        Self::with_vectorizer(index, Vectorizer::standard())
    }

    #[must_use]
    pub fn with_vectorizer(index: I, vectorizer: Vectorizer) -> Self {
        Self {
            index,
            vectorizer,
            reranker: ReRanker::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Create the collection if it is missing. Dimensionality is the topic
    /// count and must never change while points are stored.
    pub fn ensure_collection(&self) -> Result<()> {
        if !self.index.collection_exists(COLLECTION) {
            info!(collection = COLLECTION, dim = self.vectorizer.dense_dim(), "creating collection");
            self.index
                .create_collection(COLLECTION, self.vectorizer.dense_dim())?;
        }
        Ok(())
    }

    /// Validate, vectorize and store one record, replacing any previous
    /// version wholesale.
    pub fn upsert(&self, record: &CatalogRecord) -> Result<()> {
        record.validate()?;
        self.ensure_collection()?;
        let (dense, sparse) = self.vectorizer.vectorize(record);
        debug!(id = record.id, sparse_len = sparse.len(), "vectorized record");
        self.index
            .upsert(COLLECTION, StoredPoint::from_record(record, dense, sparse)?)?;
        Ok(())
    }

    /// Seed the sample catalog. Vectorization runs in parallel; returns
    /// the number of records stored.
    pub fn init_sample_data(&self) -> Result<usize> {
        self.ensure_collection()?;
        let records = sample::sample_records();
        let vectors = self.vectorizer.vectorize_batch(&records);
        for (record, (dense, sparse)) in records.iter().zip(vectors) {
            self.index
                .upsert(COLLECTION, StoredPoint::from_record(record, dense, sparse)?)?;
        }
        info!(count = records.len(), "seeded sample catalog");
        Ok(records.len())
    }

    /// Search the catalog. A blank query lists every record with score
    /// 1.0; an absent collection degrades to zero results, never an error.
    pub fn search(&self, query: &str) -> Result<Vec<ScoredResult>> {
        if !self.index.collection_exists(COLLECTION) {
            return Ok(Vec::new());
        }

        let parsed = ParsedQuery::parse(query);
        if parsed.is_blank() {
            return Ok(self
                .list_all()?
                .into_iter()
                .map(|record| ScoredResult { record, score: 1.0 })
                .collect());
        }

        let synthetic = CatalogRecord::from_query(&parsed);
        let (dense, sparse) = self.vectorizer.vectorize(&synthetic);
        let request = SearchRequest::new(dense)
            .with_limit(DEFAULT_CANDIDATE_LIMIT)
            .with_filter(Self::build_filter(&parsed, sparse.indices()));

        let hits = match self.index.search(COLLECTION, &request) {
            Ok(hits) => hits,
            Err(shelfx_index::Error::CollectionNotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        debug!(query, candidates = hits.len(), "retrieved candidates");

        let candidates = hits
            .into_iter()
            .map(|hit| Ok(Hit::new(hit.record()?, hit.score)))
            .collect::<Result<Vec<_>>>()?;

        Ok(self.reranker.rerank(&parsed, candidates))
    }

    /// Every stored record, in id order.
    pub fn list_all(&self) -> Result<Vec<CatalogRecord>> {
        if !self.index.collection_exists(COLLECTION) {
            return Ok(Vec::new());
        }
        self.index
            .scroll(COLLECTION, SCROLL_LIMIT)?
            .iter()
            .map(|point| point.record().map_err(ServiceError::from))
            .collect()
    }

    /// Drop the whole catalog. Absent collection counts as success.
    pub fn clear(&self) -> Result<()> {
        if self.index.collection_exists(COLLECTION) {
            self.index.delete_collection(COLLECTION)?;
            info!(collection = COLLECTION, "cleared catalog");
        }
        Ok(())
    }

    /// The disjunctive candidate filter sent with every search: per-field
    /// text conditions on the raw query, a whitespace-normalized copy for
    /// title/description, the proper-name condition when one was detected,
    /// the sparse-index overlap condition, and one conjunctive
    /// category+theme condition.
    fn build_filter(query: &ParsedQuery, sparse_indices: &[u32]) -> FilterCondition {
        use shelfx_core::Field;

        let raw = query.raw().to_string();
        let joined = query
            .raw()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        let text = |field: Field, text: &str| FilterCondition::Text {
            field,
            text: text.to_string(),
        };

        let mut should = vec![
            text(Field::Title, &raw),
            text(Field::Author, &raw),
            text(Field::Format, &raw),
            text(Field::Category, &raw),
            text(Field::Theme, &raw),
            text(Field::Title, &joined),
            text(Field::Description, &joined),
        ];
        if let Some(name) = query.name_candidate() {
            should.push(text(Field::Author, name));
        }
        should.push(FilterCondition::SparseAny(sparse_indices.to_vec()));
        should.push(FilterCondition::Must(vec![
            text(Field::Category, &raw),
            text(Field::Theme, &raw),
        ]));

        FilterCondition::Should(should)
    }
}
