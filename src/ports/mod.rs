//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the facade requires from
//! the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `ChainAdapter`: balance queries and transaction submission per chain

pub mod chain_adapter;

pub use chain_adapter::ChainAdapter;
