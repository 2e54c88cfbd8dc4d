//! Configuration Loader - File Loading and Validation
//!
//! Handles loading the adapter's TOML file, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use tracing::info;

use super::AdapterConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AdapterConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    rpc = %config.rpc.url,
    storage = %config.storage.address,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AdapterConfig> {
  let config: AdapterConfig = toml::from_str(content).context("Failed to parse TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - An http(s) RPC URL
/// - A well-formed Storage contract address
/// - A non-zero polling interval
fn validate_config(config: &AdapterConfig) -> Result<()> {
  anyhow::ensure!(!config.rpc.url.is_empty(), "RPC URL must not be empty");
  anyhow::ensure!(
    config.rpc.url.starts_with("http://") || config.rpc.url.starts_with("https://"),
    "RPC URL must be http(s), got {}",
    config.rpc.url
  );
  anyhow::ensure!(
    config.rpc.poll_interval_ms > 0,
    "poll_interval_ms must be positive"
  );

  config
    .storage
    .address
    .parse::<Address>()
    .with_context(|| format!("Invalid storage address: {}", config.storage.address))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  const VALID: &str = r#"
    [rpc]
    url = "http://127.0.0.1:8545"
    expected_chain_id = 31337

    [storage]
    address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
  "#;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_parse_valid_with_defaults() {
    let config = parse_config(VALID).unwrap();
    assert_eq!(config.rpc.expected_chain_id, Some(31337));
    assert_eq!(config.rpc.poll_interval_ms, 1_000);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.json);
  }

  #[test]
  fn test_rejects_bad_address() {
    let content = VALID.replace("0x5FbDB2315678afecb367f032d93F642f64180aa3", "0x123");
    let err = parse_config(&content).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid storage address"));
  }

  #[test]
  fn test_rejects_non_http_url() {
    let content = VALID.replace("http://127.0.0.1:8545", "ws://127.0.0.1:8545");
    assert!(parse_config(&content).is_err());
  }
}
