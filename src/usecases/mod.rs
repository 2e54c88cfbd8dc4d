//! Use Cases Layer - Adapter Operations
//!
//! Orchestrates the domain types through the ports:
//! - `StorageAdapter`: fetch storage handle, save all options, fetch
//!   options, save a single option

pub mod storage_adapter;

pub use storage_adapter::{OnHash, SaveOptionRequest, StorageAdapter, StorageContract};
