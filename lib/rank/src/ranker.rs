//! Similarity ranker for query skill sets
//!
//! Scores a query against every posting in the corpus index and produces
//! ranked matches with exact matched/missing skill sets.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use skillmatch_core::{normalize_skill, CorpusIndex, Posting};
use std::sync::Arc;

/// Maximum number of matches returned by default.
pub const DEFAULT_TOP_K: usize = 5;

/// One ranked match against a posting.
///
/// `match_score` is cosine similarity scaled to [0, 100] and rounded to
/// two decimals. `matched_skills`/`missing_skills` come from exact set
/// membership on the normalized skill tokens; they are independent of the
/// weighted similarity, so a matched skill can still contribute almost
/// nothing to the score when it is a very common term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub job_role: String,
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub company: String,
    pub domain: String,
    pub min_experience: String,
    pub avg_salary: String,
}

/// Ranker over an immutable corpus index snapshot.
#[derive(Debug, Clone)]
pub struct SkillRanker {
    index: Arc<CorpusIndex>,
    top_k: usize,
}

impl SkillRanker {
    #[must_use]
    pub fn new(index: Arc<CorpusIndex>) -> Self {
        Self {
            index,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override the result cap.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[must_use]
    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Match a query skill list against every posting.
    ///
    /// An empty index yields an empty result. An empty or fully
    /// out-of-vocabulary query is valid and scores 0.00 everywhere.
    /// Results are sorted by score descending; ties keep corpus order.
    #[must_use]
    pub fn match_skills(&self, skills: &[String]) -> Vec<MatchResult> {
        if self.index.is_empty() {
            return Vec::new();
        }

        let query = self.index.vectorize(skills);
        let query_set: AHashSet<String> = skills
            .iter()
            .map(|s| normalize_skill(s))
            .filter(|s| !s.is_empty())
            .collect();

        let mut results: Vec<MatchResult> = self
            .index
            .postings()
            .iter()
            .zip(self.index.document_vectors())
            .map(|(posting, doc_vector)| {
                let sim = query.cosine_similarity(doc_vector).clamp(0.0, 1.0);
                score_posting(posting, &query_set, round2(sim * 100.0))
            })
            .collect();

        // Stable sort: equal scores keep corpus order.
        results.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(self.top_k);
        results
    }
}

fn score_posting(posting: &Posting, query_set: &AHashSet<String>, match_score: f64) -> MatchResult {
    let required = posting.required_set();
    let mut matched: Vec<String> = query_set
        .iter()
        .filter(|s| required.contains(s.as_str()))
        .cloned()
        .collect();
    let mut missing: Vec<String> = required
        .iter()
        .filter(|&&s| !query_set.contains(s))
        .map(|s| s.to_string())
        .collect();
    matched.sort_unstable();
    missing.sort_unstable();

    MatchResult {
        job_role: posting.job_role.clone(),
        match_score,
        matched_skills: matched,
        missing_skills: missing,
        required_skills: posting.required_skills.clone(),
        company: passthrough(&posting.company, "Confidential"),
        domain: passthrough(&posting.domain, "N/A"),
        min_experience: passthrough(&posting.min_experience, "N/A"),
        avg_salary: passthrough(&posting.avg_salary, "N/A"),
    }
}

fn passthrough(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmatch_core::Posting;

    fn sample_ranker() -> SkillRanker {
        SkillRanker::new(Arc::new(CorpusIndex::build(vec![
            Posting::new(0, "Data Analyst", "python, sql, excel"),
            Posting::new(1, "Backend Developer", "java, sql, spring"),
        ])))
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_top_match_scenario() {
        let results = sample_ranker().match_skills(&skills(&["sql", "python"]));

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].job_role, "Data Analyst");
        assert_eq!(results[0].matched_skills, vec!["python", "sql"]);
        assert_eq!(results[0].missing_skills, vec!["excel"]);
        assert!(results[0].match_score > results[1].match_score);
    }

    #[test]
    fn test_scores_bounded() {
        let results = sample_ranker().match_skills(&skills(&["sql", "python", "excel"]));
        for result in &results {
            assert!(result.match_score >= 0.0);
            assert!(result.match_score <= 100.0);
        }
    }

    #[test]
    fn test_empty_index_returns_empty() {
        let ranker = SkillRanker::new(Arc::new(CorpusIndex::empty()));
        assert!(ranker.match_skills(&skills(&["python"])).is_empty());
    }

    #[test]
    fn test_empty_query_scores_zero() {
        let results = sample_ranker().match_skills(&[]);
        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.match_score, 0.0);
        }
        // Ties keep corpus order.
        assert_eq!(results[0].job_role, "Data Analyst");
        assert_eq!(results[1].job_role, "Backend Developer");
    }

    #[test]
    fn test_tie_break_keeps_corpus_order() {
        let ranker = SkillRanker::new(Arc::new(CorpusIndex::build(vec![
            Posting::new(0, "Role A", "go, rust"),
            Posting::new(1, "Role B", "go, rust"),
            Posting::new(2, "Role C", "go, rust"),
        ])));
        let results = ranker.match_skills(&skills(&["go"]));
        let roles: Vec<&str> = results.iter().map(|r| r.job_role.as_str()).collect();
        assert_eq!(roles, vec!["Role A", "Role B", "Role C"]);
    }

    #[test]
    fn test_truncates_to_top_k() {
        let postings: Vec<Posting> = (0..10)
            .map(|i| Posting::new(i, format!("Role {i}"), "python, sql"))
            .collect();
        let ranker = SkillRanker::new(Arc::new(CorpusIndex::build(postings)));
        assert_eq!(ranker.match_skills(&skills(&["python"])).len(), DEFAULT_TOP_K);

        let ranker = SkillRanker::new(Arc::new(CorpusIndex::build(
            (0..10)
                .map(|i| Posting::new(i, format!("Role {i}"), "python, sql"))
                .collect(),
        )))
        .with_top_k(3);
        assert_eq!(ranker.match_skills(&skills(&["python"])).len(), 3);
    }

    #[test]
    fn test_deterministic() {
        let ranker = sample_ranker();
        let query = skills(&["sql", "python"]);
        assert_eq!(ranker.match_skills(&query), ranker.match_skills(&query));
    }

    #[test]
    fn test_passthrough_defaults() {
        let results = sample_ranker().match_skills(&skills(&["sql"]));
        assert_eq!(results[0].company, "Confidential");
        assert_eq!(results[0].min_experience, "N/A");
    }

    #[test]
    fn test_unknown_terms_do_not_error() {
        let results = sample_ranker().match_skills(&skills(&["cobol", "fortran"]));
        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.match_score, 0.0);
            assert!(result.matched_skills.is_empty());
        }
    }

    #[test]
    fn test_serializes_wire_shape() {
        let results = sample_ranker().match_skills(&skills(&["sql"]));
        let json = serde_json::to_string(&results[0]).unwrap();
        assert!(json.contains("\"job_role\""));
        assert!(json.contains("\"match_score\""));
        assert!(json.contains("\"missing_skills\""));
    }
}
