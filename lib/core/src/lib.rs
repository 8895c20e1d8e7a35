//! # shelfx Core
//!
//! Core library for the shelfx catalog search engine.
//!
//! This crate provides the feature-extraction pipeline:
//!
//! - [`CatalogRecord`] - A structured catalog entry and its closed field set
//! - [`TopicVocabulary`] - The static topic/keyword tables defining both vector spaces
//! - [`text`] - Tokenization and morphological variant expansion
//! - [`fuzzy`] - Approximate token-to-keyword matching
//! - [`DenseVector`] / [`SparseVector`] - Normalized vector representations
//! - [`Vectorizer`] - Record-to-vectors conversion, batchable in parallel
//!
//! ## Example
//!
//! ```rust
//! use shelfx_core::{CatalogRecord, Vectorizer};
//!
//! let vectorizer = Vectorizer::standard();
//! let record = CatalogRecord {
//!     id: 1,
//!     title: "The Art of Programming".to_string(),
//!     description: "A guide to software development".to_string(),
//!     author: "John Smith".to_string(),
//!     category: Some("Technology".to_string()),
//!     theme: None,
//!     format: Some("Hardcover".to_string()),
//! };
//!
//! let (dense, sparse) = vectorizer.vectorize(&record);
//! assert_eq!(dense.dim(), vectorizer.dense_dim());
//! assert!(!sparse.is_empty());
//! ```

pub mod dense;
pub mod error;
pub mod fuzzy;
pub mod record;
pub mod sparse;
pub mod text;
pub mod vector;
pub mod vectorizer;
pub mod vocab;

pub use dense::DenseVectorizer;
pub use error::{Error, Result};
pub use record::{CatalogRecord, Field, ParsedQuery};
pub use sparse::SparseVectorizer;
pub use vector::{DenseVector, SparseVector};
pub use vectorizer::Vectorizer;
pub use vocab::{Topic, TopicVocabulary};
