//! Checkup pipeline integration tests
//!
//! Drives `CheckupProcessor` end to end against an in-memory data source and
//! checks the per-address outcomes and the run summary.

use super_staker_checkup::api::UtxoBatch;
use super_staker_checkup::config::RunConfig;
use super_staker_checkup::errors::AppError;
use super_staker_checkup::processor::{AddressOutcome, CheckupProcessor};
use super_staker_checkup::types::{
    FeeStatus, Network, PercentStake, UtxoRecord, UtxoWarning, STAKING_MATURITY_DEPTH,
};

use crate::common::mock_source::MockDataSource;
use crate::common::{delegate_address, STAKER_ADDRESS, TEST_HEIGHT as H};

fn run_config(staker_fee: u32, min_utxo_size: i64) -> RunConfig {
    RunConfig {
        staker_address: STAKER_ADDRESS.to_string(),
        staker_fee,
        delegate_min_value_sats: min_utxo_size * 100_000_000,
        network: Network::Mainnet,
        maturity_depth: STAKING_MATURITY_DEPTH,
    }
}

#[tokio::test]
async fn test_mature_staker_utxo_is_valid() {
    let source = MockDataSource::new(H)
        .with_utxos(STAKER_ADDRESS, vec![UtxoRecord::new(10_000_000_000, H - 600)]);

    let report = CheckupProcessor::new(&source, run_config(5, 100), 4)
        .run()
        .await
        .unwrap();

    let staker = report.staker.classification().unwrap();
    assert_eq!(staker.valid.count, 1);
    assert_eq!(staker.valid.sum_sats, 10_000_000_000);
    assert!(staker.immature.is_empty());
    assert!(staker.too_small.is_empty());
    assert_eq!(report.summary.staker_valid_plus_immature_count, 1);
    assert_eq!(
        report.summary.percent_stake_to_total,
        PercentStake::Percent(0.0)
    );
    assert!(!report.has_delegations());
}

#[tokio::test]
async fn test_recent_staker_utxo_is_immature() {
    let source = MockDataSource::new(H)
        .with_utxos(STAKER_ADDRESS, vec![UtxoRecord::new(10_000_000_000, H - 100)]);

    let report = CheckupProcessor::new(&source, run_config(5, 100), 4)
        .run()
        .await
        .unwrap();

    let staker = report.staker.classification().unwrap();
    assert_eq!(staker.immature.count, 1);
    assert!(staker.valid.is_empty());
    assert_eq!(report.summary.staker_valid_plus_immature_count, 1);
    assert_eq!(
        report.summary.percent_stake_to_total,
        PercentStake::Percent(100.0)
    );
}

#[tokio::test]
async fn test_low_fee_delegate_is_excluded() {
    let delegate = delegate_address(1);
    let source = MockDataSource::new(H)
        .with_delegation(&delegate, 3)
        .with_utxos(&delegate, vec![UtxoRecord::new(50_000_000_000, H - 1000)]);

    let report = CheckupProcessor::new(&source, run_config(5, 100), 4)
        .run()
        .await
        .unwrap();

    assert_eq!(report.delegates.len(), 1);
    assert_eq!(report.delegates[0].outcome, AddressOutcome::Ineligible);
    assert_eq!(report.delegates[0].fee_status, Some(FeeStatus::TooLow));
    assert_eq!(report.summary.delegate_valid_sum_sats, 0);
    assert_eq!(report.summary.delegates_with_stake_count, 0);
    assert_eq!(report.summary.ineligible_delegates, 1);
    // Only the staker's UTXOs were requested
    assert_eq!(source.utxo_calls(), 1);
}

#[tokio::test]
async fn test_delegate_at_exact_minimum_is_staking() {
    let delegate = delegate_address(1);
    let source = MockDataSource::new(H)
        .with_delegation(&delegate, 5)
        .with_utxos(&delegate, vec![UtxoRecord::new(100 * 100_000_000, H - 501)]);

    let report = CheckupProcessor::new(&source, run_config(5, 100), 4)
        .run()
        .await
        .unwrap();

    let result = report.delegates[0].classification().unwrap();
    assert!(result.has_staking_utxo);
    assert_eq!(report.summary.delegates_with_stake_count, 1);
    assert_eq!(report.summary.delegate_valid_sum_sats, 10_000_000_000);
}

#[tokio::test]
async fn test_large_staker_utxo_is_split_candidate() {
    let source = MockDataSource::new(H)
        .with_utxos(STAKER_ADDRESS, vec![UtxoRecord::new(20_000_000_000, H - 600)]);

    let report = CheckupProcessor::new(&source, run_config(5, 100), 4)
        .run()
        .await
        .unwrap();

    let staker = report.staker.classification().unwrap();
    assert!(staker.has_split_candidate);
    assert!(staker.has_warning(UtxoWarning::SplitLargeUtxos));
}

#[tokio::test]
async fn test_delegates_use_configured_minimum() {
    // 50 coins is too small for the staker but enough for a delegate with a 10 coin minimum
    let delegate = delegate_address(1);
    let source = MockDataSource::new(H)
        .with_utxos(STAKER_ADDRESS, vec![UtxoRecord::new(5_000_000_000, H - 600)])
        .with_delegation(&delegate, 5)
        .with_utxos(&delegate, vec![UtxoRecord::new(5_000_000_000, H - 600)]);

    let report = CheckupProcessor::new(&source, run_config(5, 10), 4)
        .run()
        .await
        .unwrap();

    assert_eq!(report.staker.classification().unwrap().too_small.count, 1);
    assert_eq!(
        report.summary.percent_stake_to_total,
        PercentStake::NoValidUtxos
    );
    assert_eq!(report.delegates[0].classification().unwrap().valid.count, 1);
    assert_eq!(report.summary.delegate_valid_sum_sats, 5_000_000_000);
}

#[tokio::test]
async fn test_many_delegates_keep_list_order_and_totals() {
    let mut source = MockDataSource::new(H).with_utxos(
        STAKER_ADDRESS,
        vec![
            UtxoRecord::new(10_000_000_000, H - 600),
            UtxoRecord::new(10_000_000_000, H - 10),
        ],
    );
    for n in 0..20 {
        let address = delegate_address(n);
        let fee = if n % 5 == 0 { 1 } else { 5 + (n % 2) as u32 };
        let records = if n % 3 == 0 {
            vec![UtxoRecord::new(1_000_000, H - 600)]
        } else {
            vec![UtxoRecord::new(10_000_000_000 + n as i64, H - 600)]
        };
        source = source.with_delegation(&address, fee).with_utxos(&address, records);
    }

    let report = CheckupProcessor::new(&source, run_config(5, 100), 3)
        .run()
        .await
        .unwrap();

    let addresses: Vec<String> = report.delegates.iter().map(|d| d.address.clone()).collect();
    let expected: Vec<String> = (0..20).map(delegate_address).collect();
    assert_eq!(addresses, expected);

    // fee too low: 0, 5, 10, 15; too small only: 3, 6, 9, 12, 18
    let staking: Vec<usize> = (0..20usize)
        .filter(|n| n % 5 != 0 && n % 3 != 0)
        .collect();
    assert_eq!(report.summary.ineligible_delegates, 4);
    assert_eq!(report.summary.eligible_delegates, 16);
    assert_eq!(report.summary.delegates_with_stake_count, staking.len());
    assert_eq!(
        report.summary.delegate_valid_sum_sats,
        staking
            .iter()
            .map(|n| 10_000_000_000 + *n as i64)
            .sum::<i64>()
    );
    assert_eq!(report.summary.staker_valid_plus_immature_count, 2);
    assert_eq!(
        report.summary.percent_stake_to_total,
        PercentStake::Percent(50.0)
    );

    let fee_too_high = report
        .delegates
        .iter()
        .filter(|d| d.fee_status == Some(FeeStatus::TooHigh))
        .count();
    assert!(fee_too_high > 0);
}

#[tokio::test]
async fn test_unavailable_delegate_is_skipped() {
    let ok = delegate_address(1);
    let down = delegate_address(2);
    let source = MockDataSource::new(H)
        .with_delegation(&ok, 5)
        .with_delegation(&down, 5)
        .with_utxos(&ok, vec![UtxoRecord::new(10_000_000_000, H - 600)])
        .with_unavailable(&down);

    let report = CheckupProcessor::new(&source, run_config(5, 100), 4)
        .run()
        .await
        .unwrap();

    assert!(matches!(
        report.delegates[1].outcome,
        AddressOutcome::Unavailable { .. }
    ));
    assert_eq!(report.summary.unavailable_addresses, vec![down]);
    assert_eq!(report.summary.delegates_with_stake_count, 1);
    assert!(!report.staker_unavailable());
}

#[tokio::test]
async fn test_unavailable_staker_still_checks_delegates() {
    let delegate = delegate_address(1);
    let source = MockDataSource::new(H)
        .with_unavailable(STAKER_ADDRESS)
        .with_delegation(&delegate, 5)
        .with_utxos(&delegate, vec![UtxoRecord::new(10_000_000_000, H - 600)]);

    let report = CheckupProcessor::new(&source, run_config(5, 100), 4)
        .run()
        .await
        .unwrap();

    assert!(report.staker_unavailable());
    assert_eq!(report.summary.delegates_with_stake_count, 1);
    assert_eq!(
        report.summary.percent_stake_to_total,
        PercentStake::NoValidUtxos
    );
}

#[tokio::test]
async fn test_malformed_records_are_counted() {
    let source = MockDataSource::new(H).with_batch(
        STAKER_ADDRESS,
        UtxoBatch {
            records: vec![UtxoRecord::new(10_000_000_000, H - 600)],
            malformed: 3,
        },
    );

    let report = CheckupProcessor::new(&source, run_config(5, 100), 4)
        .run()
        .await
        .unwrap();

    assert_eq!(report.summary.malformed_records, 3);
    assert_eq!(report.staker.classification().unwrap().total.count, 1);
}

#[tokio::test]
async fn test_bad_delegation_entries_do_not_abort_run() {
    let delegate = delegate_address(1);
    let source = MockDataSource::new(H)
        .with_delegation(&delegate, 5)
        .with_malformed_delegations(2)
        .with_utxos(&delegate, vec![UtxoRecord::new(10_000_000_000, H - 600)]);

    let report = CheckupProcessor::new(&source, run_config(5, 100), 4)
        .run()
        .await
        .unwrap();

    assert_eq!(report.delegates.len(), 1);
    assert_eq!(report.summary.malformed_records, 2);
    assert_eq!(report.summary.delegates_with_stake_count, 1);
    assert_eq!(report.summary.delegate_valid_sum_sats, 10_000_000_000);
}

#[tokio::test]
async fn test_negative_delegate_values_count_as_too_small() {
    let delegate = delegate_address(1);
    let source = MockDataSource::new(H)
        .with_delegation(&delegate, 5)
        .with_utxos(
            &delegate,
            vec![
                UtxoRecord::new(-5, H - 600),
                UtxoRecord::new(10_000_000_000, H - 600),
            ],
        );

    let report = CheckupProcessor::new(&source, run_config(5, 100), 4)
        .run()
        .await
        .unwrap();

    let result = report.delegates[0].classification().unwrap();
    assert_eq!(result.too_small.count, 1);
    assert_eq!(result.too_small.sum_sats, -5);
    assert_eq!(report.summary.delegate_valid_sum_sats, 10_000_000_000);
    assert_eq!(report.summary.malformed_records, 0);
}

#[tokio::test]
async fn test_height_failure_aborts_run() {
    let source = MockDataSource::without_height();

    let err = CheckupProcessor::new(&source, run_config(5, 100), 4)
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DataSource(_)));
    assert_eq!(source.utxo_calls(), 0);
}

#[tokio::test]
async fn test_delegation_list_failure_aborts_run() {
    let source = MockDataSource::new(H).without_delegations();

    let err = CheckupProcessor::new(&source, run_config(5, 100), 4)
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DataSource(_)));
}
