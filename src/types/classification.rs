//! Classification types
//!
//! Output of running one address's UTXOs through the classifier.

use crate::types::{Role, STAKING_MATURITY_DEPTH};
use serde::{Deserialize, Serialize};

/// The partition a single UTXO lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    /// Mature and big enough to stake
    Valid,
    /// Big enough but not yet past the maturity depth (new UTXOs or recent stakes)
    Immature,
    /// Below the minimum qualifying value, mature or not
    TooSmall,
}

/// Running count and value of one partition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionTotals {
    pub count: usize,
    pub sum_sats: i64,
}

impl PartitionTotals {
    pub fn add(&mut self, value_sats: i64) {
        self.count += 1;
        self.sum_sats = self.sum_sats.saturating_add(value_sats);
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Thresholds one classification pass runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    pub current_height: u64,
    pub maturity_depth: u64,
    pub min_qualifying_value: i64,
}

impl ClassificationThresholds {
    pub fn new(current_height: u64, min_qualifying_value: i64) -> Self {
        Self {
            current_height,
            maturity_depth: STAKING_MATURITY_DEPTH,
            min_qualifying_value,
        }
    }

    pub fn with_maturity_depth(mut self, maturity_depth: u64) -> Self {
        self.maturity_depth = maturity_depth;
        self
    }
}

/// Operator-facing warning derived from a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtxoWarning {
    /// Staker holds a UTXO of at least twice the staking minimum
    SplitLargeUtxos,
    /// Staker's too-small UTXOs add up to more than one staking minimum
    RecombineSmallUtxos,
    /// Delegate's too-small UTXOs add up to at least the staker's minimum
    DelegateShouldRecombine,
}

impl UtxoWarning {
    pub fn message(&self) -> &'static str {
        match self {
            UtxoWarning::SplitLargeUtxos => "UTXO(s) >= 200 SHOULD BE SPLIT",
            UtxoWarning::RecombineSmallUtxos => "SMALL UTXOs SHOULD SPLIT (RECOMBINED)",
            UtxoWarning::DelegateShouldRecombine => "SHOULD SPLIT UTXOS",
        }
    }
}

/// Per-address classification output
///
/// `total` always equals the sum of the three partitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub role: Role,
    pub valid: PartitionTotals,
    pub immature: PartitionTotals,
    pub too_small: PartitionTotals,
    pub total: PartitionTotals,
    /// Staker only
    pub has_split_candidate: bool,
    /// Delegate only
    pub has_staking_utxo: bool,
    pub warnings: Vec<UtxoWarning>,
}

impl ClassificationResult {
    pub fn empty(role: Role) -> Self {
        Self {
            role,
            valid: PartitionTotals::default(),
            immature: PartitionTotals::default(),
            too_small: PartitionTotals::default(),
            total: PartitionTotals::default(),
            has_split_candidate: false,
            has_staking_utxo: false,
            warnings: Vec::new(),
        }
    }

    pub fn partition(&self, partition: Partition) -> &PartitionTotals {
        match partition {
            Partition::Valid => &self.valid,
            Partition::Immature => &self.immature,
            Partition::TooSmall => &self.too_small,
        }
    }

    pub(crate) fn partition_mut(&mut self, partition: Partition) -> &mut PartitionTotals {
        match partition {
            Partition::Valid => &mut self.valid,
            Partition::Immature => &mut self.immature,
            Partition::TooSmall => &mut self.too_small,
        }
    }

    pub fn has_warning(&self, warning: UtxoWarning) -> bool {
        self.warnings.contains(&warning)
    }
}

/// How a delegate's offered fee compares with the staker's required fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeStatus {
    Matches,
    /// Still staked, but the delegate pays more than required
    TooHigh,
    /// Not staked by this super staker
    TooLow,
}

impl FeeStatus {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FeeStatus::Matches => None,
            FeeStatus::TooHigh => Some("FEE TOO HIGH"),
            FeeStatus::TooLow => Some("FEE TOO LOW, NOT STAKED"),
        }
    }
}
