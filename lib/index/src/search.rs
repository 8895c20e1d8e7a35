use shelfx_core::DenseVector;
use crate::filter::FilterCondition;

/// Candidate count requested from the index ahead of re-ranking.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 20;

/// Recall/exactness tuning passed through to the index. The in-memory
/// reference index always scans exactly and only records the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub hnsw_ef: usize,
    pub exact: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            hnsw_ef: 128,
            exact: true,
        }
    }
}

/// A nearest-neighbor search request: dense query vector, candidate limit,
/// optional disjunctive payload filter, tuning parameters.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub vector: DenseVector,
    pub limit: usize,
    pub filter: Option<FilterCondition>,
    pub params: SearchParams,
}

impl SearchRequest {
    #[must_use]
    pub fn new(vector: DenseVector) -> Self {
        Self {
            vector,
            limit: DEFAULT_CANDIDATE_LIMIT,
            filter: None,
            params: SearchParams::default(),
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: FilterCondition) -> Self {
        self.filter = Some(filter);
        self
    }
}
