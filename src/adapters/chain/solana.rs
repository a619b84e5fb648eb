//! Solana Adapter - JSON-RPC Balance Queries and Transaction Submission
//!
//! Talks to a Solana RPC node over HTTP JSON-RPC. Addresses are
//! base58-encoded 32-byte public keys, validated locally before any
//! request is sent. Balances are returned in lamports, unconverted.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, instrument};

use super::jsonrpc::JsonRpcClient;
use crate::domain::{Balance, ChainError, ChainKind, Result, SignedTransaction, TxHandle};
use crate::ports::ChainAdapter;

/// Length of an ed25519 public key.
const PUBKEY_LEN: usize = 32;

/// `getBalance` result: `{ "context": {...}, "value": <lamports> }`.
#[derive(Debug, Deserialize)]
struct BalanceResponse {
    value: u64,
}

/// Solana adapter backed by a JSON-RPC client.
pub struct SolanaAdapter {
    rpc: JsonRpcClient,
    /// Commitment level sent with requests, node default when `None`.
    commitment: Option<String>,
}

impl SolanaAdapter {
    /// Create an adapter for `rpc_url`. No request is sent.
    ///
    /// # Errors
    /// Returns `InvalidEndpoint` for a malformed URL.
    pub fn new(rpc_url: &str, timeout: Duration, commitment: Option<String>) -> Result<Self> {
        let rpc = JsonRpcClient::new(rpc_url, timeout)?;
        Ok(Self { rpc, commitment })
    }

    fn config(&self) -> serde_json::Value {
        self.commitment
            .as_ref()
            .map_or_else(|| json!({}), |c| json!({ "commitment": c }))
    }
}

/// Validate that `address` decodes to a 32-byte public key.
///
/// # Errors
/// Returns `InvalidAddress` for bad base58 or a wrong length.
pub fn parse_pubkey(address: &str) -> Result<[u8; PUBKEY_LEN]> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| ChainError::invalid_address(ChainKind::Solana, address, e))?;

    <[u8; PUBKEY_LEN]>::try_from(bytes.as_slice()).map_err(|_| {
        ChainError::invalid_address(
            ChainKind::Solana,
            address,
            format!("expected {PUBKEY_LEN} bytes, got {}", bytes.len()),
        )
    })
}

#[async_trait]
impl ChainAdapter for SolanaAdapter {
    fn chain(&self) -> ChainKind {
        ChainKind::Solana
    }

    fn chain_id(&self) -> Option<u64> {
        None
    }

    #[instrument(skip(self), fields(chain = "solana"))]
    async fn get_balance(&self, address: &str) -> Result<Balance> {
        parse_pubkey(address)?;

        let response: BalanceResponse = self
            .rpc
            .call("getBalance", json!([address, self.config()]))
            .await?;

        debug!(lamports = response.value, "Balance fetched");
        Ok(Balance::Lamports(response.value))
    }

    #[instrument(skip(self, tx), fields(chain = "solana", len = tx.as_bytes().len()))]
    async fn send_transaction(&self, tx: &SignedTransaction) -> Result<TxHandle> {
        if tx.is_empty() {
            return Err(ChainError::InvalidTransaction(
                "empty transaction payload".to_string(),
            ));
        }

        let mut config = json!({ "encoding": "base64" });
        if let Some(commitment) = &self.commitment {
            config["preflightCommitment"] = json!(commitment);
        }

        let signature: String = self
            .rpc
            .call("sendTransaction", json!([tx.to_base64(), config]))
            .await?;

        info!(%signature, "Transaction submitted");
        Ok(TxHandle::new(signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";

    #[test]
    fn test_parse_system_program() {
        assert_eq!(parse_pubkey(SYSTEM_PROGRAM).unwrap(), [0u8; 32]);
    }

    #[test]
    fn test_parse_rejects_bad_charset() {
        // '0', 'O', 'I' and 'l' are not in the base58 alphabet.
        let err = parse_pubkey("0OIl").unwrap_err();
        assert!(matches!(
            err,
            ChainError::InvalidAddress {
                chain: ChainKind::Solana,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = parse_pubkey("111").unwrap_err();
        assert!(err.to_string().contains("expected 32 bytes"));
    }

    #[test]
    fn test_config_carries_commitment() {
        let adapter = SolanaAdapter::new(
            "http://127.0.0.1:9",
            Duration::from_secs(1),
            Some("confirmed".to_string()),
        )
        .unwrap();
        assert_eq!(adapter.config(), json!({ "commitment": "confirmed" }));

        let adapter = SolanaAdapter::new("http://127.0.0.1:9", Duration::from_secs(1), None).unwrap();
        assert_eq!(adapter.config(), json!({}));
    }

    #[tokio::test]
    async fn test_empty_payload_rejected_locally() {
        let adapter = SolanaAdapter::new("http://127.0.0.1:9", Duration::from_secs(1), None).unwrap();
        let err = adapter
            .send_transaction(&SignedTransaction::from_bytes(Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, ChainError::InvalidTransaction(_)));
    }
}
