//! Use Cases Layer - Application Entry Points
//!
//! Orchestrates ports and adapters into the public workflows.
//!
//! Use cases:
//! - `MultiChain`: chain-type dispatch and call forwarding

pub mod multichain;

pub use multichain::MultiChain;
