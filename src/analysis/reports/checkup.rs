//! Checkup report formatters
//!
//! Console layout follows the long-standing SuperStakerCheckup output so
//! existing operators can diff runs against older logs.

use super::utils::{export_json, format_percent, pad_with_warning};
use super::OutputFormat;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::processor::{AddressOutcome, AddressReport, CheckupReport};
use crate::types::{ClassificationResult, PercentStake, RunSummary, UtxoWarning};
use crate::utils::currency::format_coin_amount;

pub fn format_header(version: &str) -> String {
    format!("SuperStakerCheckup {}\n", version)
}

/// Echo the loaded configuration
pub fn format_configuration(config: &AppConfig, source: &str) -> String {
    format!(
        "Configuration file {}:\nStaker Address {}, Staker Fee {}, Staker Min UTXO {}, is Mainnet {}\n",
        source,
        config.staker_address,
        config.staker_fee,
        config.staker_min_utxo_size,
        config.is_mainnet
    )
}

pub fn format_checkup(report: &CheckupReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => Ok(format_console(report)),
        OutputFormat::Json => export_json(report),
    }
}

fn format_console(report: &CheckupReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} height {}\n\n", report.network, report.height));

    output.push_str(&format_staker(
        &report.staker,
        report.summary.percent_stake_to_total,
    ));

    if report.has_delegations() {
        for delegate in &report.delegates {
            output.push_str(&format_delegate(delegate));
        }
        output.push_str(&format_summary(&report.summary));
    } else {
        output.push_str("This staker address has no delegations\n\n");
    }

    output.push_str(&format_skipped(&report.summary));
    output.push_str(&format!("Duration: {:.2} seconds\n", report.duration_seconds));

    output
}

fn format_staker(staker: &AddressReport, percent: PercentStake) -> String {
    let mut output = String::new();
    let title = format!("Super Staker {}", staker.address);

    let result = match &staker.outcome {
        AddressOutcome::Classified { result } => result,
        AddressOutcome::Unavailable { reason } => {
            output.push_str(&format!("{}\n  UTXOs unavailable: {}\n\n", title, reason));
            return output;
        }
        AddressOutcome::Ineligible => return output,
    };

    let split = warning_text(result, UtxoWarning::SplitLargeUtxos);
    output.push_str(&pad_with_warning(&title, split));
    output.push('\n');

    output.push_str(&format!(
        "  Number Valid UTXOs = {} Sum Valid UTXOs = {}\n",
        result.valid.count,
        format_coin_amount(result.valid.sum_sats)
    ));
    output.push_str(&format!(
        "  Number Immature (probably staked) UTXOs = {} Sum Immature (probably staked) UTXOs = {}\n",
        result.immature.count,
        format_coin_amount(result.immature.sum_sats)
    ));
    output.push_str(&format_too_small_line(
        result,
        UtxoWarning::RecombineSmallUtxos,
    ));
    output.push_str(&format_total_line(result));

    match percent {
        PercentStake::Percent(p) => output.push_str(&format!(
            "  Percent Stake to Total = {}\n\n",
            format_percent(p)
        )),
        PercentStake::NoValidUtxos => output.push_str("  No valid UTXOs\n\n"),
    }

    output
}

fn format_delegate(delegate: &AddressReport) -> String {
    let mut output = String::new();
    let title = format!(
        "Delegate {} Fee {}",
        delegate.address,
        delegate.fee.unwrap_or_default()
    );
    let fee_warning = delegate.fee_status.and_then(|s| s.message());
    output.push_str(&pad_with_warning(&title, fee_warning));
    output.push('\n');

    match &delegate.outcome {
        AddressOutcome::Classified { result } => {
            output.push_str(&format!(
                "  Number Valid UTXOs = {} Sum Valid UTXOs = {}\n",
                result.valid.count,
                format_coin_amount(result.valid.sum_sats)
            ));
            output.push_str(&format!(
                "  Number Immature UTXOs = {} Sum Immature UTXOs = {}\n",
                result.immature.count,
                format_coin_amount(result.immature.sum_sats)
            ));
            output.push_str(&format_too_small_line(
                result,
                UtxoWarning::DelegateShouldRecombine,
            ));
            output.push_str(&format_total_line(result));
            output.push('\n');
        }
        AddressOutcome::Unavailable { reason } => {
            output.push_str(&format!("  UTXOs unavailable: {}\n\n", reason));
        }
        AddressOutcome::Ineligible => output.push('\n'),
    }

    output
}

fn format_summary(summary: &RunSummary) -> String {
    format!(
        "Number of valid Staker UTXOs (mature + immature) {}\nNumber of delegates being staked {}\nDelegates weight {}\n\n",
        summary.staker_valid_plus_immature_count,
        summary.delegates_with_stake_count,
        format_coin_amount(summary.delegate_valid_sum_sats)
    )
}

/// Lines for work that did not make it into the totals; empty when nothing was skipped
fn format_skipped(summary: &RunSummary) -> String {
    let mut output = String::new();

    if summary.ineligible_delegates > 0 {
        output.push_str(&format!(
            "Delegates not staked (fee too low) {}\n",
            summary.ineligible_delegates
        ));
    }
    if summary.malformed_records > 0 {
        output.push_str(&format!(
            "Malformed UTXO entries skipped {}\n",
            summary.malformed_records
        ));
    }
    if !summary.unavailable_addresses.is_empty() {
        output.push_str(&format!(
            "Addresses skipped (data source unavailable) {}: {}\n",
            summary.unavailable_addresses.len(),
            summary.unavailable_addresses.join(", ")
        ));
    }
    if !output.is_empty() {
        output.push('\n');
    }

    output
}

fn format_too_small_line(result: &ClassificationResult, warning: UtxoWarning) -> String {
    let line = format!(
        "  Number Too Small UTXOs = {} Sum Too Small UTXOs = {}",
        result.too_small.count,
        format_coin_amount(result.too_small.sum_sats)
    );
    format!(
        "{}\n",
        pad_with_warning(&line, warning_text(result, warning))
    )
}

fn format_total_line(result: &ClassificationResult) -> String {
    format!(
        "  Number Total UTXOs = {} Sum Total UTXOs {}\n",
        result.total.count,
        format_coin_amount(result.total.sum_sats)
    )
}

fn warning_text(result: &ClassificationResult, warning: UtxoWarning) -> Option<&'static str> {
    result.has_warning(warning).then(|| warning.message())
}
