//! RPC Provider - alloy-rs 0.9 Connection Management
//!
//! Manages the connection to the node (or wallet bridge) that fronts the
//! Storage contract. Validates RPC connectivity at startup and exposes a
//! shared provider instance for the chain client and the wallet.
//!
//! The client and the wallet share one boxed provider, so neither has to
//! name the HTTP transport or its filler stack in its own type.

use std::sync::Arc;

use alloy::providers::{Provider, ProviderBuilder};
use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::config::RpcConfig;

/// Shared JSON-RPC provider backed by alloy-rs 0.9.
pub struct RpcProvider {
    /// The alloy HTTP provider (type-erased).
    provider: Arc<dyn Provider + Send + Sync>,
}

impl RpcProvider {
    /// Connect to the RPC endpoint and read its chain id.
    ///
    /// Fails when `expected_chain_id` is set and the node disagrees, so a
    /// Storage address from another network is caught before any call.
    #[instrument(skip_all, fields(url = %config.url))]
    pub async fn connect(config: &RpcConfig) -> Result<Self> {
        // alloy 0.9: on_http() is synchronous, returns impl Provider
        let provider = ProviderBuilder::new()
            .on_http(config.url.parse().context("Invalid RPC URL")?)
            .boxed();

        let provider: Arc<dyn Provider + Send + Sync> = Arc::new(provider);

        let chain_id = provider
            .get_chain_id()
            .await
            .context("Failed to query chain ID")?;

        if let Some(expected) = config.expected_chain_id {
            anyhow::ensure!(
                chain_id == expected,
                "Expected chain_id={expected}, node reports {chain_id}"
            );
        }

        info!(chain_id, "Connected to RPC");

        Ok(Self { provider })
    }

    /// Get a shared reference to the alloy provider (type-erased).
    pub fn inner(&self) -> Arc<dyn Provider + Send + Sync> {
        Arc::clone(&self.provider)
    }
}
