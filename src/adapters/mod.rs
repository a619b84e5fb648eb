//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (alloy providers, HTTP JSON-RPC clients).
//!
//! Adapter categories:
//! - `chain`: one `ChainAdapter` per supported network family

pub mod chain;
