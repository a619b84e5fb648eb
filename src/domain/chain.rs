//! Chain identity types.
//!
//! `ChainKind` is the closed set of networks the facade can dispatch to.
//! EVM networks differ only by an `EvmNetwork` value; there is no per-chain
//! adapter type to subclass.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::error::ChainError;

// ────────────────────────────────────────────
// Chain identity
// ────────────────────────────────────────────

/// Supported chain identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainKind {
    /// Ethereum mainnet (EVM)
    Ethereum,
    /// Polygon PoS (EVM)
    Polygon,
    /// Avalanche C-Chain (EVM)
    Avalanche,
    /// Solana
    Solana,
    /// Cosmos Hub
    Cosmos,
}

impl ChainKind {
    /// Every supported chain, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Ethereum,
        Self::Polygon,
        Self::Avalanche,
        Self::Solana,
        Self::Cosmos,
    ];

    /// Canonical lower-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Polygon => "polygon",
            Self::Avalanche => "avalanche",
            Self::Solana => "solana",
            Self::Cosmos => "cosmos",
        }
    }

    /// Whether this chain is served by the EVM adapter.
    #[must_use]
    pub const fn is_evm(self) -> bool {
        matches!(self, Self::Ethereum | Self::Polygon | Self::Avalanche)
    }
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainKind {
    type Err = ChainError;

    /// Lower-cases the input, then requires an exact match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ethereum" => Ok(Self::Ethereum),
            "polygon" => Ok(Self::Polygon),
            "avalanche" => Ok(Self::Avalanche),
            "solana" => Ok(Self::Solana),
            "cosmos" => Ok(Self::Cosmos),
            _ => Err(ChainError::UnsupportedChain(s.to_string())),
        }
    }
}

// ────────────────────────────────────────────
// EVM network parameters
// ────────────────────────────────────────────

/// Parameters that distinguish one EVM network from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvmNetwork {
    /// Which chain identity this network belongs to.
    pub chain: ChainKind,
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Decimals of the native asset (18 for every built-in network).
    pub decimals: u8,
    /// Native asset ticker, for logs.
    pub symbol: &'static str,
}

impl EvmNetwork {
    pub const ETHEREUM: Self = Self {
        chain: ChainKind::Ethereum,
        chain_id: 1,
        decimals: 18,
        symbol: "ETH",
    };

    pub const POLYGON: Self = Self {
        chain: ChainKind::Polygon,
        chain_id: 137,
        decimals: 18,
        symbol: "POL",
    };

    pub const AVALANCHE: Self = Self {
        chain: ChainKind::Avalanche,
        chain_id: 43_114,
        decimals: 18,
        symbol: "AVAX",
    };

    /// Replace the chain id, e.g. to point an adapter at a testnet.
    #[must_use]
    pub const fn with_chain_id(mut self, chain_id: Option<u64>) -> Self {
        if let Some(id) = chain_id {
            self.chain_id = id;
        }
        self
    }
}

// ────────────────────────────────────────────
// Construction options
// ────────────────────────────────────────────

/// Cosmos-specific adapter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosmosOptions {
    /// Bank denomination queried by `get_balance`.
    pub denom: String,
    /// Expected bech32 human-readable prefix of account addresses.
    pub bech32_prefix: String,
}

impl Default for CosmosOptions {
    fn default() -> Self {
        Self {
            denom: "uatom".to_string(),
            bech32_prefix: "cosmos".to_string(),
        }
    }
}

/// Optional knobs applied when `MultiChain` builds an adapter.
///
/// Fields that do not apply to the selected chain are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOptions {
    /// HTTP request timeout for the Solana and Cosmos JSON-RPC clients.
    pub timeout: Duration,
    /// EVM chain id override (testnets, forks).
    pub chain_id: Option<u64>,
    /// Solana commitment level (`processed`, `confirmed`, `finalized`).
    pub commitment: Option<String>,
    /// Cosmos denomination and address prefix.
    pub cosmos: CosmosOptions,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            chain_id: None,
            commitment: None,
            cosmos: CosmosOptions::default(),
        }
    }
}
