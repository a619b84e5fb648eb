//! Domain layer - Chain identities, balances and the error taxonomy.
//!
//! Pure types with no I/O (hexagonal architecture inner ring).
//! Adapters and the facade exchange only these types.

pub mod balance;
pub mod chain;
pub mod error;

// Re-export core types for convenience
pub use balance::{Amount, Balance, SignedTransaction, TxHandle, trim_decimal};
pub use chain::{ChainKind, ChainOptions, CosmosOptions, EvmNetwork};
pub use error::{ChainError, Result};
