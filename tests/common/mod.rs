//! Common Test Utilities
//!
//! Shared fixtures used across the unit and integration test trees: an
//! in-memory chain data source and configuration file helpers.

#![allow(dead_code)]


use std::io::Write;
use tempfile::NamedTempFile;

/// Height used by most fixtures
pub const TEST_HEIGHT: u64 = 777_320;

pub const STAKER_ADDRESS: &str = "QTJDTqqFb2ze7cbzLzJfEpkJTSJZzvvVPA";

/// Deterministic 34-character test address for delegate `n`
pub fn delegate_address(n: usize) -> String {
    format!("qDelegate{:025}", n)
}

/// Write a TOML checkup configuration to a temporary file
pub fn write_toml_config(staker_fee: u32, min_utxo_size: u64, is_mainnet: bool) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        "staker_address = \"{}\"\nstaker_fee = {}\nstaker_min_utxo_size = {}\nis_mainnet = {}\n",
        STAKER_ADDRESS, staker_fee, min_utxo_size, is_mainnet
    )
    .unwrap();
    file
}

/// Mainnet TOML configuration pointing the API client at `api_url`, with no retries
pub fn write_toml_config_with_api(staker_fee: u32, min_utxo_size: u64, api_url: &str) -> NamedTempFile {
    let mut file = write_toml_config(staker_fee, min_utxo_size, true);
    write!(
        file,
        "\n[api]\nmainnet_url = \"{}\"\nmax_retries = 0\ntimeout_seconds = 2\n",
        api_url
    )
    .unwrap();
    file
}
