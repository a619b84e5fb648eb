//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;
use crate::domain::ChainKind;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)?;

  info!(
    chains = config.chains.len(),
    timeout_seconds = config.client.timeout_seconds,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
///
/// # Errors
/// Returns an error on malformed TOML or failed validation.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content)
    .with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - At least one chain, each with a known chain type and an RPC URL
/// - Positive timeout
/// - Non-empty Cosmos overrides and watch addresses
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.chains.is_empty(),
    "At least one chain must be configured"
  );

  anyhow::ensure!(
    config.client.timeout_seconds > 0,
    "timeout_seconds must be positive, got {}",
    config.client.timeout_seconds
  );

  for (i, chain) in config.chains.iter().enumerate() {
    let kind: ChainKind = chain
      .chain
      .parse()
      .with_context(|| format!("Chain {i} has an unsupported chain type"))?;

    anyhow::ensure!(
      !chain.rpc_url.trim().is_empty(),
      "Chain {} ({}) has empty rpc_url",
      i,
      kind
    );

    if let Some(denom) = &chain.denom {
      anyhow::ensure!(
        !denom.is_empty(),
        "Chain {} ({}) has empty denom",
        i,
        kind
      );
    }

    if let Some(prefix) = &chain.bech32_prefix {
      anyhow::ensure!(
        !prefix.is_empty(),
        "Chain {} ({}) has empty bech32_prefix",
        i,
        kind
      );
    }

    anyhow::ensure!(
      chain.watch.iter().all(|a| !a.trim().is_empty()),
      "Chain {} ({}) has an empty watch address",
      i,
      kind
    );
  }

  Ok(())
}
