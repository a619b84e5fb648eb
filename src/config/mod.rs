//! Configuration Module - TOML-based Client Configuration
//!
//! Loads the list of chain endpoints (and the addresses to report on)
//! from `config.toml`. RPC URLs, chain-id overrides and the Cosmos
//! denomination live here - nothing endpoint-specific is hardcoded.

pub mod loader;

use std::time::Duration;

use serde::Deserialize;

use crate::domain::{ChainOptions, CosmosOptions};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Client-wide settings.
  #[serde(default)]
  pub client: ClientConfig,
  /// Chain endpoints.
  pub chains: Vec<ChainEndpointConfig>,
}

/// Client-wide settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// HTTP request timeout in seconds.
  #[serde(default = "default_timeout")]
  pub timeout_seconds: u64,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      log_level: default_log_level(),
      timeout_seconds: default_timeout(),
    }
  }
}

/// One chain endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainEndpointConfig {
  /// Chain type, e.g. "ethereum" (case-insensitive).
  pub chain: String,
  /// RPC endpoint URL.
  pub rpc_url: String,
  /// EVM chain id override (testnets).
  pub chain_id: Option<u64>,
  /// Cosmos bank denomination.
  pub denom: Option<String>,
  /// Cosmos bech32 address prefix.
  pub bech32_prefix: Option<String>,
  /// Solana commitment level.
  pub commitment: Option<String>,
  /// Addresses whose balances the binary reports.
  #[serde(default)]
  pub watch: Vec<String>,
}

impl ChainEndpointConfig {
  /// Adapter options for this endpoint.
  pub fn options(&self, client: &ClientConfig) -> ChainOptions {
    let defaults = CosmosOptions::default();
    ChainOptions {
      timeout: Duration::from_secs(client.timeout_seconds),
      chain_id: self.chain_id,
      commitment: self.commitment.clone(),
      cosmos: CosmosOptions {
        denom: self.denom.clone().unwrap_or(defaults.denom),
        bech32_prefix: self.bech32_prefix.clone().unwrap_or(defaults.bech32_prefix),
      },
    }
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_timeout() -> u64 {
  30
}
