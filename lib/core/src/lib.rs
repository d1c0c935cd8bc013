//! # skillmatch Core
//!
//! Core library for the skillmatch engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`SparseVector`] - Sparse term-weight vector with cosine similarity
//! - [`Posting`] - One job record with its normalized skill tokens
//! - [`CorpusIndex`] - Vocabulary, term weighting, and document vectors
//!
//! ## Example
//!
//! ```rust
//! use skillmatch_core::{CorpusIndex, Posting};
//!
//! let index = CorpusIndex::build(vec![
//!     Posting::new(0, "Data Analyst", "python, sql, excel"),
//!     Posting::new(1, "Backend Developer", "java, sql, spring"),
//! ]);
//!
//! let query = index.vectorize(&["sql".to_string(), "python".to_string()]);
//! let sim = query.cosine_similarity(&index.document_vectors()[0]);
//! assert!(sim > 0.0);
//! ```

pub mod error;
pub mod index;
pub mod posting;
pub mod stopwords;
pub mod vector;

pub use error::{Error, Result};
pub use index::CorpusIndex;
pub use posting::{load_postings, normalize_skill, split_skills, Posting};
pub use stopwords::{is_stop_word, STOP_WORDS};
pub use vector::SparseVector;
