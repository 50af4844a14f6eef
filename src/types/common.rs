//! Common types shared across the checkup pipeline
//!
//! These are the typed records the API layer hands to the classifier. Nothing in
//! here knows about HTTP or JSON layout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Satoshis per whole coin
pub const SATS_PER_COIN: i64 = 100_000_000;

/// Confirmations a UTXO must exceed before it can stake
pub const STAKING_MATURITY_DEPTH: u64 = 500;

/// Consensus minimum for a super staker UTXO (100.0 coins)
pub const STAKER_MIN_UTXO_SATS: i64 = 100 * SATS_PER_COIN;

/// Block height recorded for outputs still in the mempool; they have zero confirmations
pub const UNCONFIRMED_HEIGHT: u64 = u64::MAX;

/// A single unspent output as reported by the chain data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoRecord {
    /// Signed: the data source may report zero or negative values, which classify as too small
    pub value_sats: i64,
    pub block_height: u64,
}

impl UtxoRecord {
    pub fn new(value_sats: i64, block_height: u64) -> Self {
        Self {
            value_sats,
            block_height,
        }
    }

    /// Confirmations at `current_height`, zero for records from the future
    pub fn confirmations(&self, current_height: u64) -> u64 {
        current_height.saturating_sub(self.block_height)
    }
}

/// A delegation to the super staker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRecord {
    pub address: String,
    pub fee: u32,
}

/// Which side of the delegation an address is evaluated as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Staker,
    Delegate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "Mainnet"),
            Network::Testnet => write!(f, "Testnet"),
        }
    }
}
