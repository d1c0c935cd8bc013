//! # skillmatch
//!
//! A skill-to-job matching engine with explainable ranking and
//! statistical drift monitoring.
//!
//! skillmatch builds a term-weighting index over a job-posting corpus
//! once, then serves concurrent ranking, explanation, and drift-check
//! calls against that immutable snapshot.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install skillmatch
//! skillmatch --dataset dataset.csv match "python, sql"
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use skillmatch::prelude::*;
//!
//! let engine = MatchEngine::new(CorpusIndex::build(vec![
//!     Posting::new(0, "Data Analyst", "python, sql, excel"),
//!     Posting::new(1, "Backend Developer", "java, sql, spring"),
//! ]));
//!
//! let results = engine.match_skills(&["sql".to_string(), "python".to_string()]);
//! assert_eq!(results[0].job_role, "Data Analyst");
//!
//! let report = engine.check_drift(&[]);
//! assert!(!report.is_drift);
//! ```
//!
//! ## Crate Structure
//!
//! skillmatch is composed of several crates:
//!
//! - `skillmatch-core` - Corpus index, term weighting, sparse vectors
//! - `skillmatch-rank` - Similarity ranking and match explanations
//! - `skillmatch-drift` - Two-sample KS test and drift monitoring
//!
//! ## Features
//!
//! - **Term-weighted ranking**: smoothed tf-idf over comma-split skill
//!   tokens, cosine similarity, deterministic corpus-order tie-break
//! - **Exact skill overlap**: matched/missing sets independent of the
//!   weighted score
//! - **Explainability**: additive per-term score decomposition
//! - **Drift monitoring**: feature-wise two-sample KS test over query
//!   batches
//! - **Degraded startup**: a bad dataset yields an empty index and
//!   neutral results, never a crash

pub mod engine;

// Re-export core types
pub use skillmatch_core::{
    is_stop_word, load_postings, normalize_skill, split_skills, CorpusIndex, Error, Posting,
    Result, SparseVector, STOP_WORDS,
};

// Re-export ranking
pub use skillmatch_rank::{Explainer, Explanation, MatchResult, SkillRanker, TermContribution};

// Re-export drift monitoring
pub use skillmatch_drift::{ks_2samp, DriftMonitor, DriftReport, KsResult};

pub use engine::MatchEngine;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CorpusIndex, DriftMonitor, DriftReport, Error, Explainer, Explanation, MatchEngine,
        MatchResult, Posting, Result, SkillRanker, SparseVector,
    };
}
