//! Error taxonomy shared by every adapter and the facade.
//!
//! Adapters raise these directly; the facade never wraps or retries,
//! so a caller always sees the variant the adapter produced.

use thiserror::Error;

use super::chain::ChainKind;

/// Errors surfaced by chain adapters and the `MultiChain` facade.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The chain-type identifier did not match any supported chain.
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    /// The address is not well-formed for the target chain.
    #[error("Invalid {chain} address '{address}': {reason}")]
    InvalidAddress {
        chain: ChainKind,
        address: String,
        reason: String,
    },

    /// Transport failure, timeout, non-2xx status, JSON-RPC error object
    /// or an undecodable response.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The operation exists in the contract but this chain does not support it.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// The RPC endpoint URL could not be parsed or the HTTP client could not be built.
    #[error("Invalid RPC endpoint: {0}")]
    InvalidEndpoint(String),

    /// The transaction payload is not decodable for the target chain.
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    /// A signed EVM transaction targets a different network than the adapter.
    #[error("Chain id mismatch: adapter is configured for {expected}, transaction targets {found}")]
    ChainIdMismatch { expected: u64, found: u64 },
}

impl ChainError {
    /// Shorthand for building an [`ChainError::InvalidAddress`].
    pub fn invalid_address(
        chain: ChainKind,
        address: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidAddress {
            chain,
            address: address.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<reqwest::Error> for ChainError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Rpc(format!("request timed out: {err}"))
        } else {
            Self::Rpc(err.to_string())
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChainError>;
