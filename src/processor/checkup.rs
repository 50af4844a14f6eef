//! Super staker checkup run
//!
//! Drives one run end to end: height, staker, delegation list, then every
//! eligible delegate. Delegate UTXOs are fetched concurrently, but every
//! classification result is folded into the single [`RunAggregate`] owned here.

use crate::analysis::eligibility::{fee_status, is_eligible};
use crate::analysis::{RunAggregate, UtxoClassifier};
use crate::api::{ChainDataSource, UtxoBatch};
use crate::config::RunConfig;
use crate::errors::{ApiResult, AppResult};
use crate::types::{
    ClassificationResult, ClassificationThresholds, DelegationRecord, FeeStatus, Network, Role,
    RunSummary, TimingInfo, STAKER_MIN_UTXO_SATS,
};
use crate::utils::currency::format_sats_as_coin;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{debug, info, warn};

/// What happened to one address during the run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AddressOutcome {
    Classified { result: ClassificationResult },
    /// Delegate offered less than the required fee
    Ineligible,
    /// UTXO list could not be fetched; contributes nothing
    Unavailable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressReport {
    pub address: String,
    /// Delegates only
    pub fee: Option<u32>,
    pub fee_status: Option<FeeStatus>,
    pub outcome: AddressOutcome,
}

impl AddressReport {
    pub fn classification(&self) -> Option<&ClassificationResult> {
        match &self.outcome {
            AddressOutcome::Classified { result } => Some(result),
            _ => None,
        }
    }
}

/// Everything the report layer needs from one run
#[derive(Debug, Clone, Serialize)]
pub struct CheckupReport {
    pub network: Network,
    pub height: u64,
    pub staker_fee: u32,
    pub delegate_min_value_sats: i64,
    pub staker: AddressReport,
    /// In delegation list order
    pub delegates: Vec<AddressReport>,
    pub summary: RunSummary,
    pub duration_seconds: f64,
}

impl CheckupReport {
    pub fn has_delegations(&self) -> bool {
        !self.delegates.is_empty()
    }

    pub fn staker_unavailable(&self) -> bool {
        matches!(self.staker.outcome, AddressOutcome::Unavailable { .. })
    }
}

/// Checkup processor, generic over the chain data source
pub struct CheckupProcessor<'a, S: ChainDataSource> {
    source: &'a S,
    run_config: RunConfig,
    concurrent_requests: usize,
}

impl<'a, S: ChainDataSource> CheckupProcessor<'a, S> {
    pub fn new(source: &'a S, run_config: RunConfig, concurrent_requests: usize) -> Self {
        Self {
            source,
            run_config,
            concurrent_requests: concurrent_requests.max(1),
        }
    }

    /// Run the checkup
    ///
    /// Fails only if the chain height or the delegation list cannot be fetched.
    /// Per-address UTXO failures are recorded and the run carries on.
    pub async fn run(&self) -> AppResult<CheckupReport> {
        let mut timing = TimingInfo::new();
        let mut aggregate = RunAggregate::new();

        let height = self.source.chain_height().await?;
        info!("{} height {}", self.run_config.network, height);

        let staker = self.check_staker(height, &mut aggregate).await;

        let delegations = self
            .source
            .delegations(&self.run_config.staker_address)
            .await?;
        info!("Found {} delegations", delegations.records.len());
        if delegations.malformed > 0 {
            warn!("Skipped {} malformed delegation entries", delegations.malformed);
            aggregate.record_malformed(delegations.malformed);
        }

        let delegates = self
            .check_delegates(height, delegations.records, &mut aggregate)
            .await;

        timing.finish();
        let summary = aggregate.summarize();
        info!(
            "Delegate weight {} from {} staking delegates",
            format_sats_as_coin(summary.delegate_valid_sum_sats),
            summary.delegates_with_stake_count
        );

        Ok(CheckupReport {
            network: self.run_config.network,
            height,
            staker_fee: self.run_config.staker_fee,
            delegate_min_value_sats: self.run_config.delegate_min_value_sats,
            staker,
            delegates,
            summary,
            duration_seconds: timing.elapsed().as_secs_f64(),
        })
    }

    pub fn staker_thresholds(&self, height: u64) -> ClassificationThresholds {
        ClassificationThresholds::new(height, STAKER_MIN_UTXO_SATS)
            .with_maturity_depth(self.run_config.maturity_depth)
    }

    pub fn delegate_thresholds(&self, height: u64) -> ClassificationThresholds {
        ClassificationThresholds::new(height, self.run_config.delegate_min_value_sats)
            .with_maturity_depth(self.run_config.maturity_depth)
    }

    async fn check_staker(&self, height: u64, aggregate: &mut RunAggregate) -> AddressReport {
        let address = self.run_config.staker_address.clone();
        let fetched = self.source.utxos(&address).await;
        let outcome = Self::record_outcome(
            &address,
            fetched,
            &self.staker_thresholds(height),
            Role::Staker,
            aggregate,
        );

        AddressReport {
            address,
            fee: None,
            fee_status: None,
            outcome,
        }
    }

    async fn check_delegates(
        &self,
        height: u64,
        delegations: Vec<DelegationRecord>,
        aggregate: &mut RunAggregate,
    ) -> Vec<AddressReport> {
        let mut slots: Vec<Option<AddressReport>> = vec![None; delegations.len()];
        let mut eligible = Vec::new();

        for (index, delegation) in delegations.into_iter().enumerate() {
            let status = fee_status(delegation.fee, self.run_config.staker_fee);
            if is_eligible(delegation.fee, self.run_config.staker_fee) {
                eligible.push((index, delegation, status));
            } else {
                aggregate.record_ineligible(&delegation);
                slots[index] = Some(AddressReport {
                    address: delegation.address,
                    fee: Some(delegation.fee),
                    fee_status: Some(status),
                    outcome: AddressOutcome::Ineligible,
                });
            }
        }

        debug!(
            "Fetching {} eligible delegates with concurrent limit {}",
            eligible.len(),
            self.concurrent_requests
        );

        let thresholds = self.delegate_thresholds(height);
        let source = self.source;
        let mut fetches = stream::iter(eligible)
            .map(|(index, delegation, status)| async move {
                let fetched = source.utxos(&delegation.address).await;
                (index, delegation, status, fetched)
            })
            .buffer_unordered(self.concurrent_requests);

        // Results arrive in completion order; this loop is the only writer of the aggregate
        while let Some((index, delegation, status, fetched)) = fetches.next().await {
            let outcome = Self::record_outcome(
                &delegation.address,
                fetched,
                &thresholds,
                Role::Delegate,
                aggregate,
            );
            slots[index] = Some(AddressReport {
                address: delegation.address,
                fee: Some(delegation.fee),
                fee_status: Some(status),
                outcome,
            });
        }

        slots.into_iter().flatten().collect()
    }

    fn record_outcome(
        address: &str,
        fetched: ApiResult<UtxoBatch>,
        thresholds: &ClassificationThresholds,
        role: Role,
        aggregate: &mut RunAggregate,
    ) -> AddressOutcome {
        match fetched {
            Ok(batch) => {
                if batch.malformed > 0 {
                    warn!(
                        "Skipped {} malformed UTXO entries for {}",
                        batch.malformed, address
                    );
                    aggregate.record_malformed(batch.malformed);
                }
                let result = UtxoClassifier::classify(&batch.records, thresholds, role);
                aggregate.accumulate(&result);
                AddressOutcome::Classified { result }
            }
            Err(e) => {
                warn!("Failed to fetch UTXOs for {}: {}", address, e);
                aggregate.record_unavailable(address);
                AddressOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}
