//! qtum.info response shapes
//!
//! Example UTXO entry:
//! ```json
//! {"transactionId":"e5ec01...","outputIndex":1,"scriptPubKey":"2103...ac",
//!  "address":"qxxx...","value":"10179000000","isStake":true,
//!  "blockHeight":358641,"confirmations":274890}
//! ```
//! `value` is a decimal string; `confirmations` is ignored and recomputed from
//! `blockHeight`.

use crate::errors::AppError;
use crate::types::{DelegationRecord, UtxoRecord, UNCONFIRMED_HEIGHT};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// `GET /info`
#[derive(Debug, Clone, Deserialize)]
pub struct InfoResponse {
    pub height: u64,
}

/// `GET /address/{address}`, only the fields the checkup reads
///
/// Delegation entries stay raw so one bad entry cannot fail the whole list.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressResponse {
    #[serde(default)]
    pub delegations: Vec<Value>,
}

/// Decoded UTXO list for one address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtxoBatch {
    pub records: Vec<UtxoRecord>,
    /// Entries skipped for missing or unparsable fields
    pub malformed: usize,
}

impl UtxoBatch {
    pub fn new(records: Vec<UtxoRecord>) -> Self {
        Self {
            records,
            malformed: 0,
        }
    }
}

/// Decoded delegation list of the super staker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelegationBatch {
    /// In API order
    pub records: Vec<DelegationRecord>,
    /// Entries skipped for missing or unparsable fields
    pub malformed: usize,
}

/// Decode a `GET /address/{address}/utxo` array, skipping malformed entries
pub fn parse_utxo_entries(entries: &[Value]) -> UtxoBatch {
    let mut batch = UtxoBatch::default();

    for (index, entry) in entries.iter().enumerate() {
        match parse_utxo_entry(index, entry) {
            Ok(record) => batch.records.push(record),
            Err(e) => {
                warn!("Skipping UTXO entry: {}", e);
                batch.malformed += 1;
            }
        }
    }

    batch
}

fn parse_utxo_entry(index: usize, entry: &Value) -> Result<UtxoRecord, AppError> {
    let malformed = |reason: &str| AppError::MalformedRecord {
        index,
        reason: reason.to_string(),
    };

    let value_sats = match entry.get("value") {
        Some(Value::String(s)) => s
            .parse::<i64>()
            .map_err(|_| malformed(&format!("unparsable value {:?}", s)))?,
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| malformed(&format!("value {} is not a satoshi amount", n)))?,
        Some(_) => return Err(malformed("value has unexpected type")),
        None => return Err(malformed("missing value")),
    };

    let block_height = match entry.get("blockHeight").and_then(Value::as_i64) {
        // Mempool outputs carry a negative height and have no confirmations yet
        Some(h) if h < 0 => UNCONFIRMED_HEIGHT,
        Some(h) => h as u64,
        None => return Err(malformed("missing blockHeight")),
    };

    Ok(UtxoRecord::new(value_sats, block_height))
}

/// Decode the `delegations` array of `GET /address/{address}`, skipping malformed entries
pub fn parse_delegation_entries(entries: &[Value]) -> DelegationBatch {
    let mut batch = DelegationBatch::default();

    for (index, entry) in entries.iter().enumerate() {
        match parse_delegation_entry(index, entry) {
            Ok(record) => batch.records.push(record),
            Err(e) => {
                warn!("Skipping delegation entry: {}", e);
                batch.malformed += 1;
            }
        }
    }

    batch
}

fn parse_delegation_entry(index: usize, entry: &Value) -> Result<DelegationRecord, AppError> {
    let malformed = |reason: &str| AppError::MalformedRecord {
        index,
        reason: reason.to_string(),
    };

    let address = match entry.get("delegator") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(_) => return Err(malformed("delegator is not an address")),
        None => return Err(malformed("missing delegator")),
    };

    let fee = match entry.get("fee") {
        Some(Value::Number(n)) => n.as_u64().and_then(|f| u32::try_from(f).ok()),
        Some(Value::String(s)) => s.parse::<u32>().ok(),
        Some(_) => None,
        None => return Err(malformed("missing fee")),
    }
    .ok_or_else(|| malformed(&format!("unparsable fee for {}", address)))?;

    Ok(DelegationRecord { address, fee })
}
