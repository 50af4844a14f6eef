use crate::errors::ApiResult;
use super::{DelegationBatch, UtxoBatch};

/// Provider of chain height, UTXO lists and delegation lists
///
/// Implemented by [`super::QtumInfoClient`] for live runs and by in-memory
/// fixtures in tests.
#[allow(async_fn_in_trait)]
pub trait ChainDataSource {
    /// Current block height of the configured network
    async fn chain_height(&self) -> ApiResult<u64>;

    /// Unspent outputs of `address`, in no particular order
    async fn utxos(&self, address: &str) -> ApiResult<UtxoBatch>;

    /// Delegations made to `staker_address`, in API order
    async fn delegations(&self, staker_address: &str) -> ApiResult<DelegationBatch>;
}
