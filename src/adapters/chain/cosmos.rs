//! Cosmos Adapter - Bank Balance Queries over Tendermint RPC
//!
//! Construction only stores the endpoint. Each `get_balance` opens a
//! session (a `status` handshake), runs the bank `Balance` gRPC query
//! through `abci_query`, and drops the session when the call returns.
//!
//! Transaction submission is not supported for Cosmos.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use prost::Message;
use reqwest::Url;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use super::jsonrpc::{JsonRpcClient, parse_endpoint};
use crate::domain::{
    Balance, ChainError, ChainKind, CosmosOptions, Result, SignedTransaction, TxHandle,
};
use crate::ports::ChainAdapter;

/// gRPC method path of the bank balance query.
const BANK_BALANCE_PATH: &str = "/cosmos.bank.v1beta1.Query/Balance";

/// Protobuf messages of `cosmos.bank.v1beta1` used by the balance query.
pub mod bank {
    /// `cosmos.base.v1beta1.Coin`
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct Coin {
        #[prost(string, tag = "1")]
        pub denom: String,
        #[prost(string, tag = "2")]
        pub amount: String,
    }

    /// `cosmos.bank.v1beta1.QueryBalanceRequest`
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct QueryBalanceRequest {
        #[prost(string, tag = "1")]
        pub address: String,
        #[prost(string, tag = "2")]
        pub denom: String,
    }

    /// `cosmos.bank.v1beta1.QueryBalanceResponse`
    #[derive(Clone, PartialEq, Eq, ::prost::Message)]
    pub struct QueryBalanceResponse {
        #[prost(message, optional, tag = "1")]
        pub balance: Option<Coin>,
    }
}

// ────────────────────────────────────────────
// Tendermint RPC response shapes
// ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct StatusResult {
    node_info: NodeInfo,
}

#[derive(Debug, Deserialize)]
struct NodeInfo {
    network: String,
}

#[derive(Debug, Deserialize)]
struct AbciQueryResult {
    response: AbciResponse,
}

#[derive(Debug, Deserialize)]
struct AbciResponse {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    log: String,
    #[serde(default)]
    codespace: String,
    #[serde(default)]
    value: Option<String>,
}

/// A connection scoped to a single adapter call.
struct CosmosSession {
    rpc: JsonRpcClient,
    network: String,
}

impl CosmosSession {
    /// Connect and perform the `status` handshake.
    async fn open(url: &Url, timeout: Duration) -> Result<Self> {
        let rpc = JsonRpcClient::new(url.as_str(), timeout)?;
        let status: StatusResult = rpc.call("status", json!({})).await?;
        debug!(network = %status.node_info.network, "Cosmos session opened");
        Ok(Self {
            rpc,
            network: status.node_info.network,
        })
    }

    /// Query the bank balance of `address` in `denom`, returning the amount string.
    async fn query_balance(&self, address: &str, denom: &str) -> Result<String> {
        let request = bank::QueryBalanceRequest {
            address: address.to_string(),
            denom: denom.to_string(),
        };

        let result: AbciQueryResult = self
            .rpc
            .call(
                "abci_query",
                json!({
                    "path": BANK_BALANCE_PATH,
                    "data": hex::encode(request.encode_to_vec()),
                    "height": "0",
                    "prove": false,
                }),
            )
            .await?;

        decode_balance_response(&result.response)
    }
}

/// Turn an ABCI query response into the coin amount.
fn decode_balance_response(response: &AbciResponse) -> Result<String> {
    if response.code != 0 {
        return Err(ChainError::Rpc(format!(
            "abci_query failed (codespace '{}', code {}): {}",
            response.codespace, response.code, response.log
        )));
    }

    let raw = match response.value.as_deref() {
        Some(encoded) if !encoded.is_empty() => BASE64
            .decode(encoded)
            .map_err(|e| ChainError::Rpc(format!("abci_query value is not base64: {e}")))?,
        _ => Vec::new(),
    };

    let decoded = bank::QueryBalanceResponse::decode(raw.as_slice())
        .map_err(|e| ChainError::Rpc(format!("cannot decode QueryBalanceResponse: {e}")))?;

    Ok(decoded
        .balance
        .map(|coin| coin.amount)
        .filter(|amount| !amount.is_empty())
        .unwrap_or_else(|| "0".to_string()))
}

/// Cosmos adapter. Holds only the endpoint between calls.
pub struct CosmosAdapter {
    url: Url,
    timeout: Duration,
    options: CosmosOptions,
}

impl CosmosAdapter {
    /// Store the endpoint; no connection is made.
    ///
    /// # Errors
    /// Returns `InvalidEndpoint` for a malformed URL.
    pub fn new(rpc_url: &str, timeout: Duration, options: CosmosOptions) -> Result<Self> {
        let url = parse_endpoint(rpc_url)?;
        Ok(Self {
            url,
            timeout,
            options,
        })
    }

    /// Validate a bech32 account address and its human-readable prefix.
    ///
    /// Returns the lowercase form the bank module expects.
    fn validate_address(&self, address: &str) -> Result<String> {
        let (hrp, _data) = bech32::decode(address)
            .map_err(|e| ChainError::invalid_address(ChainKind::Cosmos, address, e))?;

        let prefix = hrp.to_string();
        if !prefix.eq_ignore_ascii_case(&self.options.bech32_prefix) {
            return Err(ChainError::invalid_address(
                ChainKind::Cosmos,
                address,
                format!(
                    "expected prefix '{}', got '{prefix}'",
                    self.options.bech32_prefix
                ),
            ));
        }
        Ok(address.to_ascii_lowercase())
    }
}

#[async_trait]
impl ChainAdapter for CosmosAdapter {
    fn chain(&self) -> ChainKind {
        ChainKind::Cosmos
    }

    fn chain_id(&self) -> Option<u64> {
        None
    }

    #[instrument(skip(self), fields(chain = "cosmos", denom = %self.options.denom))]
    async fn get_balance(&self, address: &str) -> Result<Balance> {
        let account = self.validate_address(address)?;

        let session = CosmosSession::open(&self.url, self.timeout).await?;
        let amount = session.query_balance(&account, &self.options.denom).await?;

        debug!(network = %session.network, %amount, "Balance fetched");
        Ok(Balance::Denom {
            amount,
            denom: self.options.denom.clone(),
        })
    }

    async fn send_transaction(&self, _tx: &SignedTransaction) -> Result<TxHandle> {
        Err(ChainError::NotImplemented(
            "Cosmos sendTransaction not implemented yet".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cosmos Hub address derived from the all-zero 20-byte account.
    fn zero_account() -> String {
        let hrp = bech32::Hrp::parse("cosmos").unwrap();
        bech32::encode::<bech32::Bech32>(hrp, &[0u8; 20]).unwrap()
    }

    fn adapter() -> CosmosAdapter {
        CosmosAdapter::new(
            "http://127.0.0.1:9",
            Duration::from_secs(1),
            CosmosOptions::default(),
        )
        .unwrap()
    }

    fn response(code: u32, value: Option<&str>) -> AbciResponse {
        AbciResponse {
            code,
            log: "boom".to_string(),
            codespace: "sdk".to_string(),
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_address() {
        let adapter = adapter();
        assert_eq!(adapter.validate_address(&zero_account()).unwrap(), zero_account());
        assert!(adapter.validate_address("cosmos1notvalid").is_err());

        let osmo = bech32::encode::<bech32::Bech32>(bech32::Hrp::parse("osmo").unwrap(), &[0u8; 20])
            .unwrap();
        let err = adapter.validate_address(&osmo).unwrap_err();
        assert!(err.to_string().contains("expected prefix 'cosmos'"));
    }

    #[test]
    fn test_uppercase_address_is_lowercased() {
        let upper = zero_account().to_uppercase();
        assert_eq!(adapter().validate_address(&upper).unwrap(), zero_account());
    }

    #[test]
    fn test_decode_balance_response() {
        let coin = bank::QueryBalanceResponse {
            balance: Some(bank::Coin {
                denom: "uatom".to_string(),
                amount: "1234567".to_string(),
            }),
        };
        let encoded = BASE64.encode(coin.encode_to_vec());
        assert_eq!(
            decode_balance_response(&response(0, Some(&encoded))).unwrap(),
            "1234567"
        );
    }

    #[test]
    fn test_decode_missing_balance_is_zero() {
        assert_eq!(decode_balance_response(&response(0, None)).unwrap(), "0");
        assert_eq!(decode_balance_response(&response(0, Some(""))).unwrap(), "0");
    }

    #[test]
    fn test_decode_abci_error() {
        let err = decode_balance_response(&response(22, None)).unwrap_err();
        assert!(matches!(err, ChainError::Rpc(msg) if msg.contains("code 22")));
    }

    #[test]
    fn test_request_encoding() {
        let request = bank::QueryBalanceRequest {
            address: "a".to_string(),
            denom: "b".to_string(),
        };
        // field 1 (string, len 1) 'a', field 2 (string, len 1) 'b'
        assert_eq!(request.encode_to_vec(), vec![0x0a, 0x01, b'a', 0x12, 0x01, b'b']);
    }

    #[tokio::test]
    async fn test_send_transaction_not_implemented() {
        let adapter = adapter();
        for payload in [Vec::new(), vec![1, 2, 3]] {
            let err = adapter
                .send_transaction(&SignedTransaction::from_bytes(payload))
                .await
                .unwrap_err();
            assert!(matches!(err, ChainError::NotImplemented(_)));
        }
    }

    #[tokio::test]
    async fn test_invalid_address_fails_before_connecting() {
        let err = adapter().get_balance("not-bech32").await.unwrap_err();
        assert!(matches!(
            err,
            ChainError::InvalidAddress {
                chain: ChainKind::Cosmos,
                ..
            }
        ));
    }
}
