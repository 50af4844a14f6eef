//! Qtum Super Staker Checkup
//!
//! Classifies the UTXOs of a super staker and its delegates into valid,
//! immature and too-small partitions and reports the resulting staking weight.

pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod processor;
pub mod types;
pub mod utils;
