//! Balance, transaction payload and transaction handle types.
//!
//! Balances keep the shape each chain reports: EVM networks return a
//! decimal string in the major unit, Solana returns integer lamports and
//! Cosmos returns a minor-unit amount string with its denomination.
//! `Balance::to_amount` gives a typed view without rescaling.

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rust_decimal::Decimal;

use super::error::{ChainError, Result};

/// Balance as reported by a chain adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Balance {
    /// EVM: base-10 decimal string in the major unit (ether-equivalent).
    Decimal(String),
    /// Solana: raw lamports.
    Lamports(u64),
    /// Cosmos: minor-unit amount string (e.g. `uatom`).
    Denom { amount: String, denom: String },
}

impl Balance {
    /// Typed view of the balance in the unit the chain reported it in.
    ///
    /// # Errors
    /// Fails if the reported amount is not representable as a `Decimal`.
    pub fn to_amount(&self) -> std::result::Result<Amount, rust_decimal::Error> {
        match self {
            Self::Decimal(value) => Ok(Amount {
                value: Decimal::from_str(value)?,
                unit: "major".to_string(),
            }),
            Self::Lamports(lamports) => Ok(Amount {
                value: Decimal::from(*lamports),
                unit: "lamports".to_string(),
            }),
            Self::Denom { amount, denom } => Ok(Amount {
                value: Decimal::from_str(amount)?,
                unit: denom.clone(),
            }),
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(value) => f.write_str(value),
            Self::Lamports(lamports) => write!(f, "{lamports}"),
            Self::Denom { amount, .. } => f.write_str(amount),
        }
    }
}

/// A balance value paired with the unit it is denominated in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    pub value: Decimal,
    pub unit: String,
}

/// Trim trailing fractional zeros, keeping at least one fractional digit.
///
/// `"1.500000"` → `"1.5"`, `"0.000"` → `"0.0"`, `"42"` → `"42"`.
#[must_use]
pub fn trim_decimal(formatted: &str) -> String {
    if !formatted.contains('.') {
        return formatted.to_string();
    }
    let trimmed = formatted.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

// ────────────────────────────────────────────
// Transaction payloads and handles
// ────────────────────────────────────────────

/// Caller-constructed transaction payload.
///
/// For EVM chains this is an EIP-2718 encoded, fully signed transaction.
/// For Solana it is a serialized (signed) transaction in wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction(Vec<u8>);

impl SignedTransaction {
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Parse a hex payload, with or without a `0x` prefix.
    ///
    /// # Errors
    /// Returns `InvalidTransaction` on malformed hex.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let stripped = encoded
            .strip_prefix("0x")
            .or_else(|| encoded.strip_prefix("0X"))
            .unwrap_or(encoded);
        hex::decode(stripped)
            .map(Self)
            .map_err(|e| ChainError::InvalidTransaction(format!("invalid hex payload: {e}")))
    }

    /// Parse a standard base64 payload.
    ///
    /// # Errors
    /// Returns `InvalidTransaction` on malformed base64.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        BASE64
            .decode(encoded)
            .map(Self)
            .map_err(|e| ChainError::InvalidTransaction(format!("invalid base64 payload: {e}")))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Standard base64 encoding of the payload.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.0)
    }
}

impl From<Vec<u8>> for SignedTransaction {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Network-assigned transaction identifier (EVM hash or Solana signature).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxHandle(String);

impl TxHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
