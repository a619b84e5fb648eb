//! Chain Adapters - Per-network Implementations of the ChainAdapter Port
//!
//! - `evm`: Ethereum, Polygon, Avalanche via alloy-rs (one adapter, parameterized)
//! - `solana`: Solana JSON-RPC
//! - `cosmos`: Cosmos bank queries over Tendermint RPC
//! - `jsonrpc`: shared JSON-RPC 2.0 transport for the non-EVM adapters

pub mod cosmos;
pub mod evm;
pub mod jsonrpc;
pub mod solana;

pub use cosmos::CosmosAdapter;
pub use evm::EvmAdapter;
pub use jsonrpc::JsonRpcClient;
pub use solana::SolanaAdapter;
