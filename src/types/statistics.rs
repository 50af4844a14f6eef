//! Run-level statistics
//!
//! Summary values derived once every address of a run has been aggregated,
//! plus the timing information printed in the report footer.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Share of the staker's qualifying value that is currently immature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentStake {
    Percent(f64),
    /// Neither valid nor immature UTXOs, nothing to divide by
    NoValidUtxos,
}

impl PercentStake {
    pub fn as_percent(&self) -> Option<f64> {
        match self {
            PercentStake::Percent(p) => Some(*p),
            PercentStake::NoValidUtxos => None,
        }
    }
}

/// Final run summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Staker UTXOs that are valid or immature
    pub staker_valid_plus_immature_count: usize,
    /// Delegates with at least one valid UTXO
    pub delegates_with_stake_count: usize,
    /// Delegate weight: sum of all eligible delegates' valid UTXOs
    pub delegate_valid_sum_sats: i64,
    pub percent_stake_to_total: PercentStake,
    /// Delegates that passed the fee filter and were classified
    pub eligible_delegates: usize,
    /// Delegates excluded for offering less than the required fee
    pub ineligible_delegates: usize,
    /// Addresses whose UTXOs could not be fetched
    pub unavailable_addresses: Vec<String>,
    /// UTXO entries skipped for missing or unparsable fields
    pub malformed_records: usize,
}

/// Common timing information
#[derive(Debug, Clone)]
pub struct TimingInfo {
    pub start_time: Instant,
    pub processing_duration: Duration,
}

impl Default for TimingInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingInfo {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            processing_duration: Duration::default(),
        }
    }

    pub fn finish(&mut self) {
        self.processing_duration = self.start_time.elapsed();
    }

    pub fn elapsed(&self) -> Duration {
        if self.processing_duration.is_zero() {
            self.start_time.elapsed()
        } else {
            self.processing_duration
        }
    }
}
