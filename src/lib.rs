//! # shelfx
//!
//! A catalog search engine core: structured records become a dense topic
//! vector and a sparse keyword vector for nearest-neighbor indexing, and
//! candidate hits coming back from the index are re-ranked with a
//! field-weighted lexical scoring model.
//!
//! ## Quick Start
//!
//! ```rust
//! use shelfx::prelude::*;
//!
//! let service = CatalogService::new(InMemoryIndex::new());
//! service.init_sample_data().unwrap();
//!
//! let results = service.search("quantum physics").unwrap();
//! assert!(!results.is_empty());
//! assert!((results[0].score - 1.0).abs() < 1e-6);
//! ```
//!
//! ## Crate Structure
//!
//! shelfx is composed of several crates:
//!
//! - [`shelfx-core`](https://docs.rs/shelfx-core) - Tokenization, morphology,
//!   fuzzy matching, dense/sparse vectorization
//! - [`shelfx-rank`](https://docs.rs/shelfx-rank) - Lexical re-ranking of
//!   ANN candidates
//! - [`shelfx-index`](https://docs.rs/shelfx-index) - The vector-index
//!   boundary and an in-memory reference implementation
//!
//! The root crate adds the catalog service tying the three together, plus
//! a sample catalog and a demo CLI.

pub mod sample;
pub mod service;

// Re-export core types
pub use shelfx_core::{
    CatalogRecord, DenseVector, Field, ParsedQuery, SparseVector, Topic, TopicVocabulary,
    Vectorizer,
};

// Re-export ranking
pub use shelfx_rank::{Hit, ReRanker, ScoredResult, MAX_RESULTS};

// Re-export the index boundary
pub use shelfx_index::{
    FilterCondition, InMemoryIndex, ScoredPoint, SearchParams, SearchRequest, StoredPoint,
    VectorIndex,
};

pub use service::{CatalogService, ServiceError, COLLECTION};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CatalogRecord, CatalogService, DenseVector, Field, FilterCondition, Hit, InMemoryIndex,
        ParsedQuery, ReRanker, ScoredResult, SearchRequest, SparseVector, StoredPoint,
        TopicVocabulary, VectorIndex, Vectorizer,
    };
}
