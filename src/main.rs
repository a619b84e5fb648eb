//! Multichain Balance Reporter — Entry Point
//!
//! Reads `config.toml` (or the path given as the first argument),
//! builds one `MultiChain` per configured chain and logs the balance
//! of every watch address.
//!
//! Wiring sequence:
//! 1. Load config + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Build one facade per chain (fails fast on unsupported chains)
//! 4. Query all watch addresses concurrently
//! 5. Exit non-zero if any query failed

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use multichain_client::MultiChain;
use multichain_client::config::loader::load_config;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = load_config(&path).context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.client.log_level)),
        )
        .json()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        chains = config.chains.len(),
        "Starting multichain balance reporter"
    );

    // ── 3. Build one facade per configured chain ────────────
    let mut queries = JoinSet::new();
    for endpoint in &config.chains {
        let options = endpoint.options(&config.client);
        let chain = Arc::new(
            MultiChain::with_options(&endpoint.chain, &endpoint.rpc_url, &options)
                .with_context(|| format!("Failed to set up chain '{}'", endpoint.chain))?,
        );

        if endpoint.watch.is_empty() {
            warn!(chain = %chain.chain(), "No watch addresses configured");
        }

        // ── 4. Spawn one independent query per address ──────
        for address in endpoint.watch.clone() {
            let chain = Arc::clone(&chain);
            queries.spawn(async move {
                let result = chain.get_balance(&address).await;
                (chain.chain(), address, result)
            });
        }
    }

    // ── 5. Collect results ──────────────────────────────────
    let mut failures = 0usize;
    while let Some(joined) = queries.join_next().await {
        match joined {
            Ok((chain, address, Ok(balance))) => {
                info!(%chain, %address, %balance, "Balance");
            }
            Ok((chain, address, Err(e))) => {
                failures += 1;
                error!(%chain, %address, error = %e, "Balance query failed");
            }
            Err(e) => {
                failures += 1;
                error!(error = %e, "Balance task panicked");
            }
        }
    }

    anyhow::ensure!(failures == 0, "{failures} balance queries failed");
    info!("All balance queries succeeded");
    Ok(())
}
