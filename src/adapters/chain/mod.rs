//! Chain Adapters - Storage Contract over JSON-RPC
//!
//! Provides on-chain access via alloy-rs 0.9 for:
//! - RPC provider management with chain-id check
//! - Storage contract reads and writes (`ChainClient`)
//! - Account discovery (`Wallet`)

pub mod abi;
pub mod client;
pub mod provider;
pub mod wallet;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

pub use client::RpcChainClient;
pub use provider::RpcProvider;
pub use wallet::RpcWallet;

use crate::config::RpcConfig;
use crate::usecases::StorageAdapter;

/// Adapter wired to a live RPC endpoint.
pub type RpcStorageAdapter = StorageAdapter<RpcChainClient, RpcWallet>;

/// Connect to the endpoint and build a ready adapter.
///
/// Wiring sequence:
/// 1. Connect provider (+ chain-id check)
/// 2. Create chain client with the configured receipt poll interval
/// 3. Create wallet over the same provider
pub async fn connect(config: &RpcConfig) -> Result<RpcStorageAdapter> {
    let provider = Arc::new(
        RpcProvider::connect(config)
            .await
            .context("Failed to connect RPC provider")?,
    );

    let chain = RpcChainClient::new(
        Arc::clone(&provider),
        Duration::from_millis(config.poll_interval_ms),
    );
    let wallet = RpcWallet::new(provider);

    Ok(StorageAdapter::new(Arc::new(chain), Arc::new(wallet)))
}
