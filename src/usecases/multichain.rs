//! MultiChain Use Case - Single Entry Point over Every Supported Chain
//!
//! Resolves a chain-type string to a `ChainKind`, builds the matching
//! adapter, then forwards balance and transaction calls unchanged.
//!
//! Construction is synchronous and all-or-nothing: an unknown chain
//! type fails before any adapter (or connection) exists.

use std::fmt;

use tracing::{debug, info};

use crate::adapters::chain::{CosmosAdapter, EvmAdapter, SolanaAdapter};
use crate::domain::{
  Balance, ChainKind, ChainOptions, EvmNetwork, Result, SignedTransaction, TxHandle,
};
use crate::ports::ChainAdapter;

/// Facade owning exactly one chain adapter.
pub struct MultiChain {
  adapter: Box<dyn ChainAdapter>,
}

impl MultiChain {
  /// Build a facade for `chain_type` (case-insensitive) at `rpc_url`
  /// with default options.
  ///
  /// # Errors
  /// `UnsupportedChain` for an unknown chain type, `InvalidEndpoint`
  /// for a malformed URL.
  pub fn new(chain_type: &str, rpc_url: &str) -> Result<Self> {
    Self::with_options(chain_type, rpc_url, &ChainOptions::default())
  }

  /// Build a facade with explicit adapter options.
  ///
  /// # Errors
  /// Same as [`MultiChain::new`].
  pub fn with_options(chain_type: &str, rpc_url: &str, options: &ChainOptions) -> Result<Self> {
    let kind: ChainKind = chain_type.parse()?;
    let adapter = build_adapter(kind, rpc_url, options)?;

    info!(chain = %kind, chain_id = ?adapter.chain_id(), "MultiChain ready");
    Ok(Self { adapter })
  }

  /// Wrap an already-built adapter.
  pub fn with_adapter(adapter: Box<dyn ChainAdapter>) -> Self {
    Self { adapter }
  }

  /// Chain identity of the held adapter.
  pub fn chain(&self) -> ChainKind {
    self.adapter.chain()
  }

  /// Numeric chain id (EVM only).
  pub fn chain_id(&self) -> Option<u64> {
    self.adapter.chain_id()
  }

  /// Forward to the adapter's `get_balance`.
  ///
  /// # Errors
  /// Whatever the adapter returns, unchanged.
  pub async fn get_balance(&self, address: &str) -> Result<Balance> {
    debug!(chain = %self.chain(), address, "get_balance");
    self.adapter.get_balance(address).await
  }

  /// Forward to the adapter's `send_transaction`.
  ///
  /// # Errors
  /// Whatever the adapter returns, unchanged.
  pub async fn send_transaction(&self, tx: &SignedTransaction) -> Result<TxHandle> {
    debug!(chain = %self.chain(), len = tx.as_bytes().len(), "send_transaction");
    self.adapter.send_transaction(tx).await
  }
}

impl fmt::Debug for MultiChain {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MultiChain")
      .field("chain", &self.chain())
      .field("chain_id", &self.chain_id())
      .finish()
  }
}

/// Exhaustive chain → adapter mapping.
fn build_adapter(
  kind: ChainKind,
  rpc_url: &str,
  options: &ChainOptions,
) -> Result<Box<dyn ChainAdapter>> {
  let evm = |network: EvmNetwork| -> Result<Box<dyn ChainAdapter>> {
    let network = network.with_chain_id(options.chain_id);
    Ok(Box::new(EvmAdapter::connect(network, rpc_url)?))
  };

  match kind {
    ChainKind::Ethereum => evm(EvmNetwork::ETHEREUM),
    ChainKind::Polygon => evm(EvmNetwork::POLYGON),
    ChainKind::Avalanche => evm(EvmNetwork::AVALANCHE),
    ChainKind::Solana => Ok(Box::new(SolanaAdapter::new(
      rpc_url,
      options.timeout,
      options.commitment.clone(),
    )?)),
    ChainKind::Cosmos => Ok(Box::new(CosmosAdapter::new(
      rpc_url,
      options.timeout,
      options.cosmos.clone(),
    )?)),
  }
}
