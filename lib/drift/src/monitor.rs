//! Feature-wise drift monitor
//!
//! Holds the corpus document vectors as an immutable reference
//! distribution and compares incoming query-vector batches against it
//! column by column with the two-sample KS test.

use chrono::Utc;
use serde::Serialize;
use skillmatch_core::SparseVector;
use tracing::{debug, info};

use crate::ks::ks_2samp;

/// Default significance threshold for a per-column p-value.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Outcome of one drift check.
#[derive(Debug, Clone, Serialize)]
pub struct DriftReport {
    pub is_drift: bool,
    pub drifted_feature_count: usize,
    pub p_value_avg: f64,
    pub threshold: f64,
    pub message: String,
    /// RFC 3339 UTC timestamp of the check.
    pub timestamp: String,
}

/// Drift monitor over a fixed reference distribution.
///
/// The verdict policy is deliberately sensitive: a single drifted column
/// trips the overall flag, with no multiple-comparison correction.
#[derive(Debug, Clone)]
pub struct DriftMonitor {
    reference: Vec<SparseVector>,
    n_features: usize,
    threshold: f64,
}

impl DriftMonitor {
    /// Create a monitor from the corpus document vectors.
    #[must_use]
    pub fn new(reference: Vec<SparseVector>, threshold: f64) -> Self {
        let n_features = reference.first().map_or(0, SparseVector::dims);
        info!(
            samples = reference.len(),
            features = n_features,
            "drift monitor initialized"
        );
        Self {
            reference,
            n_features,
            threshold,
        }
    }

    /// Create a monitor with the default 0.05 threshold.
    #[must_use]
    pub fn with_default_threshold(reference: Vec<SparseVector>) -> Self {
        Self::new(reference, DEFAULT_THRESHOLD)
    }

    #[inline]
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Check a batch of query vectors against the reference distribution.
    ///
    /// An empty batch is a defined no-op. A column whose test cannot be
    /// computed defaults to p = 1.0 (not drifted) instead of aborting.
    #[must_use]
    pub fn check(&self, batch: &[SparseVector]) -> DriftReport {
        if batch.is_empty() {
            return DriftReport {
                is_drift: false,
                drifted_feature_count: 0,
                p_value_avg: 1.0,
                threshold: self.threshold,
                message: "No new data to check".to_string(),
                timestamp: Utc::now().to_rfc3339(),
            };
        }

        let mut p_values = Vec::with_capacity(self.n_features);
        let mut drifted_feature_count = 0usize;
        for col in 0..self.n_features {
            let ref_column: Vec<f64> = self.reference.iter().map(|v| v.column_value(col)).collect();
            let new_column: Vec<f64> = batch.iter().map(|v| v.column_value(col)).collect();

            let p_value = match ks_2samp(&ref_column, &new_column) {
                Some(result) if result.p_value.is_finite() => result.p_value,
                _ => 1.0,
            };
            if p_value < self.threshold {
                drifted_feature_count += 1;
                debug!(col, p_value, "feature column drifted");
            }
            p_values.push(p_value);
        }

        let p_value_avg = if p_values.is_empty() {
            1.0
        } else {
            p_values.iter().sum::<f64>() / p_values.len() as f64
        };
        let is_drift = drifted_feature_count > 0;

        info!(
            batch = batch.len(),
            drifted_feature_count, p_value_avg, is_drift, "drift check complete"
        );

        DriftReport {
            is_drift,
            drifted_feature_count,
            p_value_avg,
            threshold: self.threshold,
            message: if is_drift {
                "Significant drift detected".to_string()
            } else {
                "Data distribution stable".to_string()
            },
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmatch_core::{CorpusIndex, Posting};

    fn sample_index(repeat: usize) -> CorpusIndex {
        let mut postings = Vec::new();
        for i in 0..repeat {
            postings.push(Posting::new(postings.len(), format!("Analyst {i}"), "python, sql, excel"));
            postings.push(Posting::new(postings.len(), format!("Backend {i}"), "java, sql, spring"));
        }
        CorpusIndex::build(postings)
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let index = sample_index(1);
        let monitor = DriftMonitor::with_default_threshold(index.document_vectors().to_vec());
        let report = monitor.check(&[]);

        assert!(!report.is_drift);
        assert_eq!(report.drifted_feature_count, 0);
        assert_eq!(report.p_value_avg, 1.0);
        assert_eq!(report.message, "No new data to check");
    }

    #[test]
    fn test_same_distribution_no_drift() {
        let index = sample_index(50);
        let monitor = DriftMonitor::with_default_threshold(index.document_vectors().to_vec());

        // Batch built from the exact same skill strings as the corpus.
        let batch: Vec<SparseVector> = index
            .postings()
            .iter()
            .map(|p| index.vectorize(&p.required_skills))
            .collect();
        let report = monitor.check(&batch);

        assert!(!report.is_drift);
        assert_eq!(report.drifted_feature_count, 0);
        assert!(report.p_value_avg > 0.99);
    }

    #[test]
    fn test_disjoint_vocabulary_drifts() {
        let index = sample_index(50);
        let monitor = DriftMonitor::with_default_threshold(index.document_vectors().to_vec());

        // Entirely out-of-vocabulary queries vectorize to all-zero rows.
        let disjoint: Vec<String> = vec!["cobol".into(), "fortran".into()];
        let batch: Vec<SparseVector> = (0..50).map(|_| index.vectorize(&disjoint)).collect();
        let report = monitor.check(&batch);

        assert!(report.is_drift);
        assert!(report.drifted_feature_count > 0);
        assert_eq!(report.message, "Significant drift detected");
    }

    #[test]
    fn test_empty_reference_is_stable() {
        let monitor = DriftMonitor::with_default_threshold(Vec::new());
        let report = monitor.check(&[SparseVector::zeros(0)]);

        assert!(!report.is_drift);
        assert_eq!(report.p_value_avg, 1.0);
        assert_eq!(report.message, "Data distribution stable");
    }

    #[test]
    fn test_report_serializes() {
        let monitor = DriftMonitor::new(Vec::new(), 0.01);
        let report = monitor.check(&[]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"is_drift\":false"));
        assert!(json.contains("\"threshold\":0.01"));
        assert!(json.contains("\"timestamp\""));
    }
}
