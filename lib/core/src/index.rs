use ahash::AHashMap;
use std::path::Path;
use tracing::{info, warn};

use crate::posting::{load_postings, normalize_skill, Posting};
use crate::stopwords::is_stop_word;
use crate::vector::SparseVector;

/// Term-weighting index over the job corpus.
///
/// Built once from the postings and read-only afterwards. The vocabulary
/// maps each normalized skill term to a dense column index; columns are
/// assigned in first-seen corpus order and never change for the lifetime
/// of one index instance. A rebuild produces a new index value.
///
/// Per (posting, term) weight: `tf * (ln((1 + n) / (1 + df)) + 1)` with
/// `n` the posting count and `df` the number of postings containing the
/// term, followed by L2 normalization of the whole vector.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    postings: Vec<Posting>,
    /// term -> column
    vocabulary: AHashMap<String, usize>,
    /// column -> term
    terms: Vec<String>,
    /// column -> document frequency
    doc_freqs: Vec<usize>,
    doc_vectors: Vec<SparseVector>,
}

impl CorpusIndex {
    /// An index with no postings and an empty vocabulary.
    ///
    /// Every downstream operation treats it as "no matches, no drift".
    #[must_use]
    pub fn empty() -> Self {
        Self {
            postings: Vec::new(),
            vocabulary: AHashMap::new(),
            terms: Vec::new(),
            doc_freqs: Vec::new(),
            doc_vectors: Vec::new(),
        }
    }

    /// Build the index from an ordered posting sequence.
    #[must_use]
    pub fn build(postings: Vec<Posting>) -> Self {
        let mut vocabulary: AHashMap<String, usize> = AHashMap::new();
        let mut terms: Vec<String> = Vec::new();

        // Columns in first-seen corpus order, stop words excluded.
        for posting in &postings {
            for term in &posting.required_skills {
                if is_stop_word(term) {
                    continue;
                }
                if !vocabulary.contains_key(term) {
                    vocabulary.insert(term.clone(), terms.len());
                    terms.push(term.clone());
                }
            }
        }

        let mut doc_freqs = vec![0usize; terms.len()];
        for posting in &postings {
            let mut seen: Vec<usize> = posting
                .required_skills
                .iter()
                .filter_map(|t| vocabulary.get(t).copied())
                .collect();
            seen.sort_unstable();
            seen.dedup();
            for col in seen {
                doc_freqs[col] += 1;
            }
        }

        let n = postings.len();
        let doc_vectors = postings
            .iter()
            .map(|p| weighted_vector(p.required_skills.iter(), &vocabulary, &doc_freqs, n, terms.len()))
            .collect();

        info!(
            postings = n,
            vocabulary = terms.len(),
            "corpus index built"
        );

        Self {
            postings,
            vocabulary,
            terms,
            doc_freqs,
            doc_vectors,
        }
    }

    /// Build the index from a CSV dataset.
    ///
    /// A missing file or malformed dataset degrades to the empty index
    /// instead of failing; the service stays up with neutral results.
    #[must_use]
    pub fn from_csv(path: impl AsRef<Path>) -> Self {
        match load_postings(path.as_ref()) {
            Ok(postings) => Self::build(postings),
            Err(e) => {
                warn!(error = %e, path = %path.as_ref().display(), "failed to load corpus, starting with an empty index");
                Self::empty()
            }
        }
    }

    /// Vectorize a query skill list against the fixed vocabulary.
    ///
    /// Terms absent from the vocabulary are silently ignored. The result
    /// is L2-normalized, or all-zero when nothing overlaps.
    #[must_use]
    pub fn vectorize(&self, skills: &[String]) -> SparseVector {
        let normalized: Vec<String> = skills
            .iter()
            .map(|s| normalize_skill(s))
            .filter(|s| !s.is_empty())
            .collect();
        weighted_vector(
            normalized.iter(),
            &self.vocabulary,
            &self.doc_freqs,
            self.postings.len(),
            self.terms.len(),
        )
    }

    /// Deduplicated normalized skill terms across all postings, sorted.
    ///
    /// Includes stop-worded terms: this is the extraction vocabulary for
    /// the external resume-skill extractor, not the index vocabulary.
    #[must_use]
    pub fn get_all_skills(&self) -> Vec<String> {
        let mut skills: Vec<String> = self
            .postings
            .iter()
            .flat_map(|p| p.required_skills.iter().cloned())
            .collect();
        skills.sort_unstable();
        skills.dedup();
        skills
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Number of postings in the corpus.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    #[inline]
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    #[must_use]
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    #[inline]
    #[must_use]
    pub fn document_vectors(&self) -> &[SparseVector] {
        &self.doc_vectors
    }

    /// Term at a vocabulary column.
    #[inline]
    #[must_use]
    pub fn term(&self, col: usize) -> &str {
        &self.terms[col]
    }

    /// Column index of a normalized term, if in the vocabulary.
    #[inline]
    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
#[inline]
fn idf(n: usize, df: usize) -> f64 {
    ((1.0 + n as f64) / (1.0 + df as f64)).ln() + 1.0
}

fn weighted_vector<'a>(
    tokens: impl Iterator<Item = &'a String>,
    vocabulary: &AHashMap<String, usize>,
    doc_freqs: &[usize],
    n: usize,
    dims: usize,
) -> SparseVector {
    let mut term_freqs: AHashMap<usize, f64> = AHashMap::new();
    for token in tokens {
        if let Some(&col) = vocabulary.get(token) {
            *term_freqs.entry(col).or_insert(0.0) += 1.0;
        }
    }

    let entries = term_freqs
        .into_iter()
        .map(|(col, tf)| (col, tf * idf(n, doc_freqs[col])))
        .collect();

    let mut vector = SparseVector::new(dims, entries);
    vector.normalize();
    vector
}
