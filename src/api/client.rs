use crate::api::types::{
    parse_delegation_entries, parse_utxo_entries, AddressResponse, InfoResponse,
};
use crate::api::{calculate_next_backoff, ChainDataSource, DelegationBatch, UtxoBatch};
use crate::config::ApiConfig;
use crate::errors::{ApiError, ApiResult};
use crate::types::Network;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// qtum.info REST client with retry logic
pub struct QtumInfoClient {
    http: reqwest::Client,
    base_url: String,
    config: ApiConfig,
    request_count: AtomicU64,
    error_count: AtomicU64,
}

impl QtumInfoClient {
    /// Create a client for `network` using the URLs and limits in `config`
    pub fn new(config: ApiConfig, network: Network) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::ConnectionFailed(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = config.base_url(network).trim_end_matches('/').to_string();
        info!("Using {} API at {}", network, base_url);

        Ok(Self {
            http,
            base_url,
            config,
            request_count: AtomicU64::new(0),
            error_count: AtomicU64::new(0),
        })
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Requests sent so far, retries included
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Failed attempts so far, retries included
    pub fn get_error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    /// GET `path` and decode the JSON body, retrying transient failures
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.endpoint_url(path);
        let mut backoff = Duration::from_millis(self.config.initial_backoff_ms);
        let mut attempts = 0usize;

        loop {
            match self.fetch_once(&url).await {
                Ok(value) => {
                    if attempts > 0 {
                        debug!("Fetched {} after {} attempts", url, attempts + 1);
                    }
                    return Ok(value);
                }
                Err(e) => {
                    attempts += 1;
                    self.error_count.fetch_add(1, Ordering::Relaxed);

                    if !e.is_retryable() {
                        error!("Request to {} failed: {}", url, e);
                        return Err(e);
                    }

                    if attempts > self.config.max_retries {
                        error!("Giving up on {} after {} attempts: {}", url, attempts, e);
                        return Err(ApiError::MaxRetriesExceeded {
                            endpoint: url,
                            last_error: e.to_string(),
                        });
                    }

                    warn!(
                        "Attempt {} failed for {}, retrying in {:?}: {}",
                        attempts, url, backoff, e
                    );
                    sleep(backoff).await;

                    backoff = calculate_next_backoff(
                        backoff,
                        self.config.backoff_multiplier,
                        self.config.max_backoff_seconds,
                    );
                }
            }
        }
    }

    async fn fetch_once<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        self.request_count.fetch_add(1, Ordering::Relaxed);

        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    timeout_seconds: self.config.timeout_seconds,
                    endpoint: url.to_string(),
                }
            } else {
                ApiError::RequestFailed {
                    endpoint: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                endpoint: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ApiError::RequestFailed {
            endpoint: url.to_string(),
            message: format!("Failed to read body: {}", e),
        })?;

        serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("{}: {}", url, e)))
    }
}

impl ChainDataSource for QtumInfoClient {
    async fn chain_height(&self) -> ApiResult<u64> {
        let info: InfoResponse = self.get_json("info").await?;
        debug!("Chain height {}", info.height);
        Ok(info.height)
    }

    async fn utxos(&self, address: &str) -> ApiResult<UtxoBatch> {
        let entries: Vec<Value> = self.get_json(&format!("address/{}/utxo", address)).await?;
        let batch = parse_utxo_entries(&entries);
        debug!(
            "Fetched {} UTXOs for {} ({} malformed)",
            batch.records.len(),
            address,
            batch.malformed
        );
        Ok(batch)
    }

    async fn delegations(&self, staker_address: &str) -> ApiResult<DelegationBatch> {
        let response: AddressResponse =
            self.get_json(&format!("address/{}", staker_address)).await?;
        let batch = parse_delegation_entries(&response.delegations);
        debug!(
            "Fetched {} delegations for {} ({} malformed)",
            batch.records.len(),
            staker_address,
            batch.malformed
        );
        Ok(batch)
    }
}
