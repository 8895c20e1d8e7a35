//! In-memory reference index.
//!
//! A process-local implementation of [`VectorIndex`]: collections are
//! RwLock-guarded id-to-point maps and search is an exact linear cosine
//! scan with post-filtering. Stands in for the external index service in
//! tests, benches and the demo CLI.

use ahash::AHashMap;
use parking_lot::RwLock;
use crate::point::{ScoredPoint, StoredPoint};
use crate::search::SearchRequest;
use crate::traits::VectorIndex;
use crate::{Error, Result};

struct CollectionState {
    dense_dim: usize,
    points: AHashMap<u64, StoredPoint>,
}

#[derive(Default)]
pub struct InMemoryIndex {
    collections: RwLock<AHashMap<String, CollectionState>>,
}

impl InMemoryIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl VectorIndex for InMemoryIndex {
    fn collection_exists(&self, collection: &str) -> bool {
        self.collections.read().contains_key(collection)
    }

    fn create_collection(&self, collection: &str, dense_dim: usize) -> Result<()> {
        let mut collections = self.collections.write();
        if collections.contains_key(collection) {
            return Err(Error::CollectionExists(collection.to_string()));
        }
        collections.insert(
            collection.to_string(),
            CollectionState {
                dense_dim,
                points: AHashMap::new(),
            },
        );
        Ok(())
    }

    fn delete_collection(&self, collection: &str) -> Result<()> {
        let mut collections = self.collections.write();
        collections
            .remove(collection)
            .map(|_| ())
            .ok_or_else(|| Error::CollectionNotFound(collection.to_string()))
    }

    fn upsert(&self, collection: &str, point: StoredPoint) -> Result<()> {
        let mut collections = self.collections.write();
        let state = collections
            .get_mut(collection)
            .ok_or_else(|| Error::CollectionNotFound(collection.to_string()))?;
        if point.dense.dim() != state.dense_dim {
            return Err(Error::InvalidDimension {
                expected: state.dense_dim,
                actual: point.dense.dim(),
            });
        }
        state.points.insert(point.id, point);
        Ok(())
    }

    fn search(&self, collection: &str, request: &SearchRequest) -> Result<Vec<ScoredPoint>> {
        let collections = self.collections.read();
        let state = collections
            .get(collection)
            .ok_or_else(|| Error::CollectionNotFound(collection.to_string()))?;
        if request.vector.dim() != state.dense_dim {
            return Err(Error::InvalidDimension {
                expected: state.dense_dim,
                actual: request.vector.dim(),
            });
        }

        let query = request.vector.normalized();
        let mut hits: Vec<ScoredPoint> = state
            .points
            .values()
            .filter(|point| {
                request
                    .filter
                    .as_ref()
                    .map(|f| f.matches(point))
                    .unwrap_or(true)
            })
            .map(|point| ScoredPoint {
                id: point.id,
                score: point.dense.cosine_similarity(&query),
                payload: point.payload.clone(),
            })
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(request.limit);
        Ok(hits)
    }

    fn scroll(&self, collection: &str, limit: usize) -> Result<Vec<ScoredPoint>> {
        let collections = self.collections.read();
        let state = collections
            .get(collection)
            .ok_or_else(|| Error::CollectionNotFound(collection.to_string()))?;

        let mut points: Vec<&StoredPoint> = state.points.values().collect();
        points.sort_by_key(|p| p.id);
        Ok(points
            .into_iter()
            .take(limit)
            .map(|point| ScoredPoint {
                id: point.id,
                score: 1.0,
                payload: point.payload.clone(),
            })
            .collect())
    }

    fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map(|state| state.points.len())
            .unwrap_or(0)
    }
}
