use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration issues (missing or malformed required field)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chain data provider failures
    #[error("Data source unavailable: {0}")]
    DataSource(#[from] ApiError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The staker's own UTXOs could not be fetched; the report is incomplete
    #[error("Super staker {0} UTXOs unavailable, report is incomplete")]
    StakerUnavailable(String),

    /// UTXO entry missing required fields
    #[error("Malformed UTXO record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// qtum.info API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failed to build the HTTP client or reach the server at all
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed at the transport level
    #[error("Request failed: {endpoint} - {message}")]
    RequestFailed { endpoint: String, message: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    /// Request timed out
    #[error("Request timeout: {timeout_seconds}s for {endpoint}")]
    Timeout {
        timeout_seconds: u64,
        endpoint: String,
    },

    /// Response body could not be decoded into the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Retry limit exceeded
    #[error("Max retries exceeded: {endpoint} ({last_error})")]
    MaxRetriesExceeded { endpoint: String, last_error: String },
}

impl ApiError {
    /// Whether another attempt could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::RequestFailed { .. } | ApiError::Timeout { .. } => true,
            ApiError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
