//! qtum.info API integration module
//!
//! This module provides all chain-data retrieval for a checkup run:
//! - **Source** - The `ChainDataSource` seam the processor is generic over
//! - **Client** - Async qtum.info REST client with retry logic
//! - **Types** - Response shapes and their conversion into typed records
//! - **Retry** - Exponential backoff helper
//!
//! Raw response text never leaves this module; the processor only sees
//! `UtxoRecord` and `DelegationRecord` values.

pub mod client;
pub mod retry;
pub mod source;
pub mod types;

// Re-export main types
pub use client::QtumInfoClient;
pub use retry::calculate_next_backoff;
pub use source::ChainDataSource;
pub use types::{DelegationBatch, UtxoBatch};
