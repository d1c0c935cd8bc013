//! # skillmatch Drift
//!
//! Statistical drift monitoring for query distributions.
//!
//! The monitor holds the corpus document vectors as an immutable
//! reference and compares a batch of new query vectors feature-by-feature
//! with a two-sample Kolmogorov-Smirnov test. Any column whose p-value
//! falls below the significance threshold counts as drifted, and a single
//! drifted column trips the overall verdict.
//!
//! ## Example
//!
//! ```rust
//! use skillmatch_core::{CorpusIndex, Posting};
//! use skillmatch_drift::DriftMonitor;
//!
//! let index = CorpusIndex::build(vec![
//!     Posting::new(0, "Data Analyst", "python, sql, excel"),
//! ]);
//! let monitor = DriftMonitor::with_default_threshold(index.document_vectors().to_vec());
//!
//! let report = monitor.check(&[]);
//! assert!(!report.is_drift);
//! assert_eq!(report.p_value_avg, 1.0);
//! ```

pub mod ks;
pub mod monitor;

pub use ks::{ks_2samp, KsResult};
pub use monitor::{DriftMonitor, DriftReport, DEFAULT_THRESHOLD};
