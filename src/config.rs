use crate::errors::{AppError, AppResult};
use crate::types::{Network, SATS_PER_COIN, STAKING_MATURITY_DEPTH};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from the checkup configuration file and
/// `SSC_*` environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address of the super staker
    pub staker_address: String,
    /// Fee the super staker requires from delegates
    pub staker_fee: u32,
    /// Minimum delegate UTXO size the staker will stake, in whole coins
    pub staker_min_utxo_size: u64,
    /// `false` selects testnet
    pub is_mainnet: bool,
    pub api: ApiConfig,
    pub output: OutputConfig,
}

/// qtum.info API client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub mainnet_url: String,
    pub testnet_url: String,
    pub timeout_seconds: u64,
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
    pub concurrent_requests: usize,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mainnet_url: "https://qtum.info/api/".to_string(),
            testnet_url: "https://testnet.qtum.info/api/".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
            initial_backoff_ms: 500,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 10,
            concurrent_requests: 4,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.88 Safari/537.36".to_string(),
        }
    }
}

impl ApiConfig {
    /// Base URL for the selected network
    pub fn base_url(&self, network: Network) -> &str {
        match network {
            Network::Mainnet => &self.mainnet_url,
            Network::Testnet => &self.testnet_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Report rendering format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

/// Immutable per-run parameters handed to the classifier and processor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub staker_address: String,
    pub staker_fee: u32,
    /// Delegate minimum, already converted to satoshis
    pub delegate_min_value_sats: i64,
    pub network: Network,
    pub maturity_depth: u64,
}

impl AppConfig {
    /// Load configuration from `path`, then apply `SSC_*` environment overrides.
    /// Format is inferred from the file extension (TOML or JSON).
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "Configuration file does not exist: {}",
                path.display()
            )));
        }

        let config = Self::builder(path)?.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    fn builder(
        path: &Path,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = ApiConfig::default();
        Ok(Config::builder()
            .set_default("api.mainnet_url", defaults.mainnet_url)?
            .set_default("api.testnet_url", defaults.testnet_url)?
            .set_default("api.timeout_seconds", defaults.timeout_seconds)?
            .set_default("api.max_retries", defaults.max_retries as i64)?
            .set_default("api.initial_backoff_ms", defaults.initial_backoff_ms)?
            .set_default("api.backoff_multiplier", defaults.backoff_multiplier)?
            .set_default("api.max_backoff_seconds", defaults.max_backoff_seconds)?
            .set_default(
                "api.concurrent_requests",
                defaults.concurrent_requests as i64,
            )?
            .set_default("api.user_agent", defaults.user_agent)?
            .set_default("output.format", "console")?
            .add_source(File::from(path))
            // SSC_STAKER_FEE etc. override the top-level keys
            .add_source(Environment::with_prefix("SSC").try_parsing(true)))
    }

    /// Reject values the checkup cannot run with
    pub fn validate(&self) -> AppResult<()> {
        if self.staker_address.is_empty() {
            return Err(AppError::Config("staker_address is empty".to_string()));
        }
        if !self.staker_address.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::Config(format!(
                "staker_address contains invalid characters: {}",
                self.staker_address
            )));
        }
        if self.staker_min_utxo_size == 0 {
            return Err(AppError::Config(
                "staker_min_utxo_size must be greater than zero".to_string(),
            ));
        }
        if self.min_utxo_size_sats().is_none() {
            return Err(AppError::Config(format!(
                "staker_min_utxo_size is too large: {}",
                self.staker_min_utxo_size
            )));
        }
        if self.api.concurrent_requests == 0 {
            return Err(AppError::Config(
                "api.concurrent_requests must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn network(&self) -> Network {
        if self.is_mainnet {
            Network::Mainnet
        } else {
            Network::Testnet
        }
    }

    /// `staker_min_utxo_size` in satoshis, `None` on overflow
    fn min_utxo_size_sats(&self) -> Option<i64> {
        i64::try_from(self.staker_min_utxo_size)
            .ok()
            .and_then(|coins| coins.checked_mul(SATS_PER_COIN))
    }

    /// Derive the immutable run parameters
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            staker_address: self.staker_address.clone(),
            staker_fee: self.staker_fee,
            delegate_min_value_sats: self.min_utxo_size_sats().unwrap_or(i64::MAX),
            network: self.network(),
            maturity_depth: STAKING_MATURITY_DEPTH,
        }
    }
}
