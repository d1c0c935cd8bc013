//! Engine facade over the index, ranker, explainer, and drift monitor
//!
//! Holds the current corpus index snapshot behind a read lock. Queries
//! clone the `Arc` and run against that snapshot, so a concurrent reload
//! is never observed partially: the new index is built off-lock and
//! swapped in whole.

use parking_lot::RwLock;
use skillmatch_core::{CorpusIndex, Result, SparseVector};
use skillmatch_drift::{DriftMonitor, DriftReport, DEFAULT_THRESHOLD};
use skillmatch_rank::{Explainer, Explanation, MatchResult, SkillRanker, DEFAULT_TOP_K};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Matching engine over an atomically swappable corpus index snapshot.
pub struct MatchEngine {
    index: RwLock<Arc<CorpusIndex>>,
    top_k: usize,
    threshold: f64,
}

impl MatchEngine {
    #[must_use]
    pub fn new(index: CorpusIndex) -> Self {
        Self {
            index: RwLock::new(Arc::new(index)),
            top_k: DEFAULT_TOP_K,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Build an engine from a CSV dataset, degrading to an empty index on
    /// load failure.
    #[must_use]
    pub fn from_csv(path: impl AsRef<Path>) -> Self {
        Self::new(CorpusIndex::from_csv(path))
    }

    /// Override the ranking result cap.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Override the drift significance threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// The current index snapshot. Callers holding this `Arc` keep a
    /// consistent view across a concurrent reload.
    #[must_use]
    pub fn snapshot(&self) -> Arc<CorpusIndex> {
        self.index.read().clone()
    }

    /// Rebuild the index from a dataset and swap it in atomically.
    /// In-flight calls finish against the snapshot they started with.
    pub fn reload_from_csv(&self, path: impl AsRef<Path>) {
        let fresh = Arc::new(CorpusIndex::from_csv(path));
        info!(postings = fresh.len(), vocabulary = fresh.vocab_size(), "swapping corpus index");
        *self.index.write() = fresh;
    }

    /// Rank a query skill list against the corpus.
    #[must_use]
    pub fn match_skills(&self, skills: &[String]) -> Vec<MatchResult> {
        SkillRanker::new(self.snapshot())
            .with_top_k(self.top_k)
            .match_skills(skills)
    }

    /// Explain one query-posting similarity.
    ///
    /// # Errors
    /// `Error::RoleNotFound` when no posting has the given role name.
    pub fn explain(&self, skills: &[String], job_role: &str) -> Result<Explanation> {
        Explainer::new(self.snapshot()).explain(skills, job_role)
    }

    /// Check a batch of query skill lists for distribution drift against
    /// the corpus document vectors.
    #[must_use]
    pub fn check_drift(&self, batch: &[Vec<String>]) -> DriftReport {
        let index = self.snapshot();
        let vectors: Vec<SparseVector> = batch.iter().map(|skills| index.vectorize(skills)).collect();
        DriftMonitor::new(index.document_vectors().to_vec(), self.threshold).check(&vectors)
    }

    /// Deduplicated normalized skill terms, for the external extractor.
    #[must_use]
    pub fn all_skills(&self) -> Vec<String> {
        self.snapshot().get_all_skills()
    }
}
