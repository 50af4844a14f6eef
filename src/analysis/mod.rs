//! Staking analysis module
//!
//! - **Classifier** - Partitions one address's UTXOs into valid, immature and too-small
//! - **Aggregator** - Folds per-address results into run totals and the final summary
//! - **Eligibility** - Delegate fee filter applied before classification
//! - **Reports** - Console and JSON rendering of a finished run
//!
//! ## Usage
//!
//! ```rust
//! use super_staker_checkup::analysis::{RunAggregate, UtxoClassifier};
//! use super_staker_checkup::types::{ClassificationThresholds, Role, UtxoRecord, STAKER_MIN_UTXO_SATS};
//!
//! let thresholds = ClassificationThresholds::new(777_320, STAKER_MIN_UTXO_SATS);
//! let records = [UtxoRecord::new(10_000_000_000, 776_720)];
//! let result = UtxoClassifier::classify(&records, &thresholds, Role::Staker);
//!
//! let mut aggregate = RunAggregate::new();
//! aggregate.accumulate(&result);
//! assert_eq!(aggregate.summarize().staker_valid_plus_immature_count, 1);
//! ```

pub mod aggregator;
pub mod classifier;
pub mod eligibility;
pub mod reports;

// Re-export main types and interfaces
pub use aggregator::RunAggregate;
pub use classifier::UtxoClassifier;
pub use reports::ReportFormatter;
