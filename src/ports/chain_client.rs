//! Chain Client Port - Storage Contract Interaction Interface
//!
//! Defines the trait the adapter uses to read from and write to the
//! Storage contract. Writes are two-phase: `submit` returns as soon as the
//! network accepts the transaction (hash known), `confirm` waits for the
//! receipt. Uses alloy primitives for addresses and hashes.

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;

use crate::domain::calls::{ReadCall, ReadOutput, WriteCall};
use crate::errors::ChainError;

/// A transaction accepted by the network but not yet confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTx {
  /// Transaction hash.
  pub tx_hash: TxHash,
}

/// Confirmed transaction outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
  /// Transaction hash.
  pub tx_hash: TxHash,
  /// Block the transaction was included in, if reported.
  pub block_number: Option<u64>,
}

/// Trait for Storage contract calls.
///
/// Implementations own the ABI; callers only deal in typed calls.
#[async_trait]
pub trait ChainClient: Send + Sync + 'static {
  /// Execute a read-only call against `contract`.
  ///
  /// # Errors
  /// Returns `ChainError::InvalidReturnValues` when the output cannot be
  /// decoded (no contract, wrong contract or wrong network).
  async fn call(&self, contract: Address, call: ReadCall) -> Result<ReadOutput, ChainError>;

  /// Submit a state-changing call signed by `from`.
  ///
  /// Resolves once the transaction hash is known.
  async fn submit(
    &self,
    contract: Address,
    from: Address,
    call: WriteCall,
  ) -> Result<PendingTx, ChainError>;

  /// Wait for a submitted transaction to be mined.
  async fn confirm(&self, pending: PendingTx) -> Result<TxReceipt, ChainError>;
}
