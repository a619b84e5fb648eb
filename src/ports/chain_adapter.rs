//! Chain Adapter Port - Per-chain Balance and Transaction Interface
//!
//! Defines the capability set every supported network implements.
//! The `MultiChain` facade holds exactly one `ChainAdapter` and forwards
//! to it without adding validation, retries or sequencing.

use async_trait::async_trait;

use crate::domain::{Balance, ChainKind, Result, SignedTransaction, TxHandle};

/// Trait implemented once per supported network family.
///
/// Implementations must be reentrant: concurrent calls on the same
/// adapter are allowed and carry no ordering guarantee.
#[async_trait]
pub trait ChainAdapter: Send + Sync + 'static {
    /// Chain identity this adapter serves.
    fn chain(&self) -> ChainKind;

    /// Numeric chain id for EVM networks, `None` elsewhere.
    ///
    /// Informational; only the EVM adapter uses it, to reject signed
    /// transactions that target another network.
    fn chain_id(&self) -> Option<u64>;

    /// Query the current balance of `address`.
    ///
    /// The shape of the returned `Balance` depends on the chain.
    /// Fails with `InvalidAddress` for malformed input and `Rpc` for
    /// network failures.
    async fn get_balance(&self, address: &str) -> Result<Balance>;

    /// Submit a caller-constructed transaction and return its network id.
    async fn send_transaction(&self, tx: &SignedTransaction) -> Result<TxHandle>;
}
