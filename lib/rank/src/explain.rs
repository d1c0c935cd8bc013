//! Per-term explanation of a single match score
//!
//! Decomposes one query-document cosine similarity into additive per-term
//! contributions. Because both vectors are unit-normalized with
//! non-negative weights, the element-wise products sum exactly to the
//! similarity score; there is no intercept, so the baseline is fixed at 0.

use serde::Serialize;
use skillmatch_core::{CorpusIndex, Error, Result};
use std::sync::Arc;

/// One term's additive contribution to the similarity score.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TermContribution {
    pub term: String,
    pub contribution: f64,
}

/// Explanation of one query-posting similarity.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub job_role: String,
    /// Strictly positive contributions, sorted descending.
    pub contributions: Vec<TermContribution>,
    /// Cosine similarity has no intercept term.
    pub baseline: f64,
}

impl Explanation {
    /// Sum of all contributions; equals the cosine similarity.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.contributions.iter().map(|c| c.contribution).sum()
    }
}

/// Explainer over an immutable corpus index snapshot.
#[derive(Debug, Clone)]
pub struct Explainer {
    index: Arc<CorpusIndex>,
}

impl Explainer {
    #[must_use]
    pub fn new(index: Arc<CorpusIndex>) -> Self {
        Self { index }
    }

    /// Explain the similarity between a query and the posting with the
    /// given role name (case-sensitive; first posting wins on duplicates).
    ///
    /// # Errors
    /// [`Error::RoleNotFound`] when no posting has that role name.
    pub fn explain(&self, skills: &[String], job_role: &str) -> Result<Explanation> {
        let pos = self
            .index
            .postings()
            .iter()
            .position(|p| p.job_role == job_role)
            .ok_or_else(|| Error::RoleNotFound(job_role.to_string()))?;

        let query = self.index.vectorize(skills);
        let doc_vector = &self.index.document_vectors()[pos];

        let mut contributions: Vec<TermContribution> = query
            .entries()
            .iter()
            .filter_map(|&(col, query_weight)| {
                let product = query_weight * doc_vector.column_value(col);
                (product > 0.0).then(|| TermContribution {
                    term: self.index.term(col).to_string(),
                    contribution: product,
                })
            })
            .collect();

        // Stable sort over column-ordered entries keeps ties deterministic.
        contributions.sort_by(|a, b| {
            b.contribution
                .partial_cmp(&a.contribution)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(Explanation {
            job_role: job_role.to_string(),
            contributions,
            baseline: 0.0,
        })
    }
}
