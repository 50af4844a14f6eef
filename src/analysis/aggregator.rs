//! Run-level weight aggregation
//!
//! `RunAggregate` is the only mutable state of a checkup run. It is owned by the
//! task driving the run and written once per address through [`RunAggregate::accumulate`];
//! [`RunAggregate::summarize`] only reads. Accumulation is commutative, so
//! delegate results may arrive in any order.

use crate::types::{
    ClassificationResult, DelegationRecord, PartitionTotals, PercentStake, Role, RunSummary,
};
use crate::utils::math::percentage_of_sats;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunAggregate {
    staker_valid_plus_immature_count: usize,
    delegate_valid_sum_sats: i64,
    delegates_with_stake_count: usize,
    staker_valid: PartitionTotals,
    staker_immature: PartitionTotals,
    eligible_delegates: usize,
    ineligible_delegates: usize,
    unavailable_addresses: Vec<String>,
    malformed_records: usize,
}

impl RunAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one address's classification into the run totals
    pub fn accumulate(&mut self, result: &ClassificationResult) {
        match result.role {
            Role::Staker => {
                self.staker_valid_plus_immature_count += result.valid.count + result.immature.count;
                self.staker_valid.count += result.valid.count;
                self.staker_valid.sum_sats =
                    self.staker_valid.sum_sats.saturating_add(result.valid.sum_sats);
                self.staker_immature.count += result.immature.count;
                self.staker_immature.sum_sats = self
                    .staker_immature
                    .sum_sats
                    .saturating_add(result.immature.sum_sats);
            }
            Role::Delegate => {
                self.eligible_delegates += 1;
                self.delegate_valid_sum_sats =
                    self.delegate_valid_sum_sats.saturating_add(result.valid.sum_sats);
                if result.has_staking_utxo {
                    self.delegates_with_stake_count += 1;
                }
            }
        }

        debug!(
            "Accumulated {:?} result: delegate weight now {} sats",
            result.role, self.delegate_valid_sum_sats
        );
    }

    /// Count a delegate excluded by the fee filter
    pub fn record_ineligible(&mut self, delegation: &DelegationRecord) {
        debug!(
            "Delegate {} excluded, fee {} below requirement",
            delegation.address, delegation.fee
        );
        self.ineligible_delegates += 1;
    }

    /// Count an address whose UTXOs could not be fetched
    pub fn record_unavailable(&mut self, address: &str) {
        self.unavailable_addresses.push(address.to_string());
    }

    pub fn record_malformed(&mut self, count: usize) {
        self.malformed_records += count;
    }

    pub fn summarize(&self) -> RunSummary {
        let staker_weight = self
            .staker_immature
            .sum_sats
            .saturating_add(self.staker_valid.sum_sats);
        let percent_stake_to_total =
            match percentage_of_sats(self.staker_immature.sum_sats, staker_weight) {
                Some(percent) => PercentStake::Percent(percent),
                None => PercentStake::NoValidUtxos,
            };

        RunSummary {
            staker_valid_plus_immature_count: self.staker_valid_plus_immature_count,
            delegates_with_stake_count: self.delegates_with_stake_count,
            delegate_valid_sum_sats: self.delegate_valid_sum_sats,
            percent_stake_to_total,
            eligible_delegates: self.eligible_delegates,
            ineligible_delegates: self.ineligible_delegates,
            unavailable_addresses: self.unavailable_addresses.clone(),
            malformed_records: self.malformed_records,
        }
    }
}
