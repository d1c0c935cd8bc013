//! # skillmatch Rank
//!
//! Similarity ranking and match explanations on top of a corpus index.
//!
//! ## Features
//!
//! - **Ranking**: cosine similarity of a query against every posting,
//!   sorted with a stable corpus-order tie-break and capped at top-k
//! - **Exact skill sets**: matched/missing skills via set membership,
//!   independent of the weighted similarity
//! - **Explainability**: additive per-term decomposition of one score
//!
//! ## Example
//!
//! ```rust
//! use skillmatch_core::{CorpusIndex, Posting};
//! use skillmatch_rank::SkillRanker;
//! use std::sync::Arc;
//!
//! let index = Arc::new(CorpusIndex::build(vec![
//!     Posting::new(0, "Data Analyst", "python, sql, excel"),
//!     Posting::new(1, "Backend Developer", "java, sql, spring"),
//! ]));
//!
//! let ranker = SkillRanker::new(index);
//! let results = ranker.match_skills(&["sql".to_string(), "python".to_string()]);
//! assert_eq!(results[0].job_role, "Data Analyst");
//! ```

pub mod explain;
pub mod ranker;

pub use explain::{Explainer, Explanation, TermContribution};
pub use ranker::{MatchResult, SkillRanker, DEFAULT_TOP_K};
