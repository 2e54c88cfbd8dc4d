//! `Wallet` port over the endpoint's `eth_accounts`.

use std::sync::Arc;

use alloy::primitives::Address;
use async_trait::async_trait;
use tracing::debug;

use crate::errors::ChainError;
use crate::ports::wallet::Wallet;

use super::provider::RpcProvider;

/// Accounts unlocked on the node or exposed by the wallet bridge.
pub struct RpcWallet {
    provider: Arc<RpcProvider>,
}

impl RpcWallet {
    pub const fn new(provider: Arc<RpcProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Wallet for RpcWallet {
    async fn accounts(&self) -> Result<Vec<Address>, ChainError> {
        let accounts = self
            .provider
            .inner()
            .get_accounts()
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))?;

        debug!(count = accounts.len(), "eth_accounts");
        Ok(accounts)
    }
}
