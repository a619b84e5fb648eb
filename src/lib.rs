//! Multichain Client — Library Root
//!
//! One balance/transaction facade over EVM, Solana and Cosmos RPC
//! endpoints, selected by a chain-type string at construction.
//!
//! ```no_run
//! # async fn demo() -> multichain_client::domain::Result<()> {
//! use multichain_client::MultiChain;
//!
//! let eth = MultiChain::new("ethereum", "https://eth.llamarpc.com")?;
//! let balance = eth.get_balance("0x0000000000000000000000000000000000000000").await?;
//! println!("{balance}");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;

pub use domain::{Balance, ChainError, ChainKind, ChainOptions, SignedTransaction, TxHandle};
pub use ports::ChainAdapter;
pub use usecases::MultiChain;
