//! Wallet Port - Account Discovery
//!
//! The injected wallet only has to answer `eth_accounts`. The adapter
//! signs every write as the first account returned.

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::errors::ChainError;

/// Trait for the wallet that owns the signing accounts.
#[async_trait]
pub trait Wallet: Send + Sync + 'static {
  /// Accounts exposed by the wallet, in the wallet's order.
  async fn accounts(&self) -> Result<Vec<Address>, ChainError>;
}
