//! Delegate fee eligibility
//!
//! A delegate is only staked when its offered fee meets the staker's required
//! fee. Ineligible delegates never reach the classifier.

use crate::types::FeeStatus;

/// Whether the staker will stake for a delegate offering `delegate_fee`
pub fn is_eligible(delegate_fee: u32, staker_fee: u32) -> bool {
    delegate_fee >= staker_fee
}

pub fn fee_status(delegate_fee: u32, staker_fee: u32) -> FeeStatus {
    match delegate_fee.cmp(&staker_fee) {
        std::cmp::Ordering::Equal => FeeStatus::Matches,
        std::cmp::Ordering::Greater => FeeStatus::TooHigh,
        std::cmp::Ordering::Less => FeeStatus::TooLow,
    }
}
