//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) the adapter operations require from
//! the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `ChainClient`: Storage contract reads and two-phase writes
//! - `Wallet`: Account discovery (`eth_accounts`)

pub mod chain_client;
pub mod wallet;

pub use chain_client::{ChainClient, PendingTx, TxReceipt};
pub use wallet::Wallet;
