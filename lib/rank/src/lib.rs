//! # shelfx Rank
//!
//! Lexical re-ranking for the shelfx catalog search engine.
//!
//! ANN retrieval gets candidates into the room; this crate decides the
//! order they leave in. Scores from the vector index are adjusted with
//! exact-match and containment boosts per field, word-coverage boosts, and
//! a proper-name author boost, then rescaled against the batch maximum and
//! truncated to the top results.
//!
//! ## Example
//!
//! ```rust
//! use shelfx_core::{CatalogRecord, ParsedQuery};
//! use shelfx_rank::{Hit, ReRanker};
//!
//! let reranker = ReRanker::new();
//! let query = ParsedQuery::parse("quantum physics");
//! let candidate = CatalogRecord {
//!     id: 2,
//!     title: "Quantum Physics for Beginners".to_string(),
//!     description: "An accessible introduction to quantum mechanics".to_string(),
//!     author: "Sarah Chen".to_string(),
//!     category: Some("Science".to_string()),
//!     theme: None,
//!     format: None,
//! };
//!
//! let results = reranker.rerank(&query, vec![Hit::new(candidate, 0.8)]);
//! assert!((results[0].score - 1.0).abs() < 1e-6);
//! ```

pub mod rerank;

pub use rerank::{Hit, ReRanker, ScoredResult, MAX_RESULTS};
