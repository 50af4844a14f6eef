//! UTXO classification
//!
//! Sorts an address's UTXOs into three disjoint partitions:
//! - **valid**: more than `maturity_depth` confirmations and at least the minimum qualifying value
//! - **too small**: below the minimum qualifying value, whatever the maturity
//! - **immature**: big enough, but not yet past the maturity depth
//!
//! Size is checked before maturity, so an output that is both immature and too small
//! is counted as too small.

use crate::types::{
    ClassificationResult, ClassificationThresholds, Partition, Role, UtxoRecord, UtxoWarning,
};
use tracing::debug;

/// UTXO classification engine
pub struct UtxoClassifier;

impl UtxoClassifier {
    /// Classify every record of one address
    ///
    /// Never fails: an empty slice yields an all-zero result with both flags cleared.
    pub fn classify(
        records: &[UtxoRecord],
        thresholds: &ClassificationThresholds,
        role: Role,
    ) -> ClassificationResult {
        let mut result = ClassificationResult::empty(role);
        let split_threshold = thresholds.min_qualifying_value.saturating_mul(2);

        for record in records {
            let partition = Self::partition_for(record, thresholds);
            result.partition_mut(partition).add(record.value_sats);
            result.total.add(record.value_sats);

            if role == Role::Staker && record.value_sats >= split_threshold {
                result.has_split_candidate = true;
            }
        }

        if role == Role::Delegate {
            result.has_staking_utxo = result.valid.count > 0;
        }

        result.warnings = Self::warnings_for(&result, thresholds);

        debug!(
            "Classified {} UTXOs as {:?}: valid={} immature={} too_small={}",
            result.total.count,
            role,
            result.valid.count,
            result.immature.count,
            result.too_small.count
        );

        result
    }

    /// Pick the single partition a record belongs to
    pub fn partition_for(record: &UtxoRecord, thresholds: &ClassificationThresholds) -> Partition {
        let is_big_enough = record.value_sats >= thresholds.min_qualifying_value;

        if !is_big_enough {
            Partition::TooSmall
        } else if Self::is_mature(record, thresholds) {
            Partition::Valid
        } else {
            Partition::Immature
        }
    }

    /// Mature once confirmations strictly exceed the maturity depth
    pub fn is_mature(record: &UtxoRecord, thresholds: &ClassificationThresholds) -> bool {
        record.confirmations(thresholds.current_height) > thresholds.maturity_depth
    }

    fn warnings_for(
        result: &ClassificationResult,
        thresholds: &ClassificationThresholds,
    ) -> Vec<UtxoWarning> {
        let mut warnings = Vec::new();
        let too_small = &result.too_small;

        match result.role {
            Role::Staker => {
                if result.has_split_candidate {
                    warnings.push(UtxoWarning::SplitLargeUtxos);
                }
                if too_small.sum_sats > thresholds.min_qualifying_value {
                    warnings.push(UtxoWarning::RecombineSmallUtxos);
                }
            }
            Role::Delegate => {
                if too_small.sum_sats >= thresholds.min_qualifying_value {
                    warnings.push(UtxoWarning::DelegateShouldRecombine);
                }
            }
        }

        warnings
    }
}
