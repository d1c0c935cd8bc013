use serde::{Deserialize, Serialize};

/// A sparse vector over the corpus vocabulary.
///
/// Entries are `(column, weight)` pairs kept sorted by column index,
/// with only strictly positive weights stored. Dimensionality equals the
/// vocabulary size of the index that produced the vector.
///
/// Invariant: any non-zero vector produced by the corpus index is
/// L2-normalized (unit norm within 1e-9); a query with no in-vocabulary
/// terms is the all-zero vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SparseVector {
    dims: usize,
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Create a vector from raw entries. Entries are sorted by column and
    /// zero or negative weights are dropped.
    #[must_use]
    pub fn new(dims: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(col, w)| col < dims && w > 0.0);
        entries.sort_unstable_by_key(|&(col, _)| col);
        Self { dims, entries }
    }

    /// The all-zero vector of the given dimensionality.
    #[inline]
    #[must_use]
    pub fn zeros(dims: usize) -> Self {
        Self { dims, entries: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn dims(&self) -> usize {
        self.dims
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored `(column, weight)` pairs, sorted by column.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Weight at a column, 0.0 when the column is not stored.
    #[inline]
    pub fn column_value(&self, col: usize) -> f64 {
        match self.entries.binary_search_by_key(&col, |&(c, _)| c) {
            Ok(i) => self.entries[i].1,
            Err(_) => 0.0,
        }
    }

    /// L2 norm of the vector.
    #[inline]
    pub fn l2_norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Normalize the vector to unit length. The zero vector stays zero.
    pub fn normalize(&mut self) {
        let norm = self.l2_norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }

    /// Get a normalized copy.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }

    /// Dot product with another vector via a merge walk over the sorted
    /// entry lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ca, wa) = self.entries[i];
            let (cb, wb) = other.entries[j];
            match ca.cmp(&cb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Compute cosine similarity with another vector.
    ///
    /// With non-negative weights the result is bounded to [0, 1]. Either
    /// vector being zero yields 0.0.
    pub fn cosine_similarity(&self, other: &SparseVector) -> f64 {
        if self.dims != other.dims {
            return 0.0;
        }
        let norm_a = self.l2_norm();
        let norm_b = other.l2_norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        self.dot(other) / (norm_a * norm_b)
    }
}
