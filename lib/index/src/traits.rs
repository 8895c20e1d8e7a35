use crate::point::{ScoredPoint, StoredPoint};
use crate::search::SearchRequest;
use crate::Result;

/// Boundary to the vector index service the engine stores into and
/// queries. One dense vector (cosine metric, dimensionality fixed at
/// collection creation) and one named sparse vector per point, plus a
/// JSON payload.
///
/// Implementations own all transport and retry concerns; callers treat a
/// missing collection on the query path as "zero candidates", never as a
/// failure.
pub trait VectorIndex: Send + Sync {
    /// Whether the named collection exists.
    fn collection_exists(&self, collection: &str) -> bool;

    /// Create the named collection with the given dense dimensionality.
    fn create_collection(&self, collection: &str, dense_dim: usize) -> Result<()>;

    /// Drop the named collection and every point in it.
    fn delete_collection(&self, collection: &str) -> Result<()>;

    /// Insert or fully replace one point.
    fn upsert(&self, collection: &str, point: StoredPoint) -> Result<()>;

    /// Nearest-neighbor search over dense vectors with an optional payload
    /// filter. Returns up to `request.limit` hits, best first.
    fn search(&self, collection: &str, request: &SearchRequest) -> Result<Vec<ScoredPoint>>;

    /// Full listing of up to `limit` points with payload, in id order.
    fn scroll(&self, collection: &str, limit: usize) -> Result<Vec<ScoredPoint>>;

    /// Number of points in the collection, zero if absent.
    fn count(&self, collection: &str) -> usize;
}
