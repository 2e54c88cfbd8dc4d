//! Configuration Module - TOML-based Adapter Configuration
//!
//! Loads and validates the RPC endpoint, the default Storage contract
//! address and logging settings from a TOML file. Embedding applications
//! may also build `AdapterConfig` directly.

pub mod loader;

use serde::Deserialize;

/// Top-level adapter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdapterConfig {
  /// JSON-RPC endpoint.
  pub rpc: RpcConfig,
  /// Storage contract location.
  pub storage: StorageConfig,
  /// Logging.
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// JSON-RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcConfig {
  /// HTTP(S) RPC URL of the node or wallet bridge.
  pub url: String,
  /// Refuse to connect when the node reports a different chain id.
  pub expected_chain_id: Option<u64>,
  /// Receipt polling interval while confirming (milliseconds).
  #[serde(default = "default_poll_interval")]
  pub poll_interval_ms: u64,
}

/// Storage contract configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
  /// Deployed Storage contract address (0x-prefixed hex).
  pub address: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
  #[serde(default = "default_log_level")]
  pub level: String,
  /// Emit JSON lines instead of human-readable output.
  #[serde(default = "default_true")]
  pub json: bool,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
      json: true,
    }
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_true() -> bool {
  true
}

fn default_poll_interval() -> u64 {
  1_000
}
