//! Super Staker Checkup - Type System
//!
//! - `common`: Chain-level records shared by every stage (UtxoRecord, DelegationRecord, Network)
//! - `classification`: Per-address classification output (ClassificationResult, PartitionTotals)
//! - `statistics`: Run summary and timing information

mod classification;
mod common;
pub mod statistics;

pub use classification::*;
pub use common::*;

pub use statistics::{PercentStake, RunSummary, TimingInfo};
