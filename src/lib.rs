//! Project Storage Adapter — Library Root
//!
//! Reads and writes project branding, settings and token lists on an
//! on-chain Storage contract through an injected chain client and wallet.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod telemetry;
pub mod usecases;

pub use errors::{ChainError, StorageError};
pub use usecases::{SaveOptionRequest, StorageAdapter};
