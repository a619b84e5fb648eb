//! JSON-RPC 2.0 over HTTP - Shared Transport for Non-EVM Adapters
//!
//! Wraps reqwest with request-id allocation, status handling and
//! JSON-RPC error-object mapping. Used by the Solana adapter and
//! by per-call Cosmos (Tendermint) sessions.
//!
//! No retries: every failure maps to `ChainError::Rpc` and is
//! returned to the caller as-is.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{ChainError, Result};

/// Outgoing JSON-RPC request envelope.
#[derive(Debug, Serialize)]
struct RpcRequest<'a, P> {
  jsonrpc: &'static str,
  id: u64,
  method: &'a str,
  params: P,
}

/// Incoming JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
struct RpcResponse<R> {
  result: Option<R>,
  error: Option<RpcErrorObject>,
}

/// JSON-RPC error object.
#[derive(Debug, Deserialize)]
struct RpcErrorObject {
  code: i64,
  message: String,
  #[serde(default)]
  data: Option<serde_json::Value>,
}

/// Minimal JSON-RPC 2.0 client bound to one endpoint.
pub struct JsonRpcClient {
  /// Underlying HTTP client.
  http: Client,
  /// Endpoint URL.
  url: Url,
  /// Monotonic request id.
  next_id: AtomicU64,
}

impl JsonRpcClient {
  /// Build a client for `endpoint`. Performs no network I/O.
  ///
  /// # Errors
  /// Returns `InvalidEndpoint` if the URL does not parse or the
  /// HTTP client cannot be built.
  pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
    let url = parse_endpoint(endpoint)?;

    let http = Client::builder()
      .timeout(timeout)
      .pool_max_idle_per_host(5)
      .build()
      .map_err(|e| ChainError::InvalidEndpoint(format!("failed to build HTTP client: {e}")))?;

    Ok(Self {
      http,
      url,
      next_id: AtomicU64::new(1),
    })
  }

  /// Endpoint this client talks to.
  pub fn url(&self) -> &Url {
    &self.url
  }

  /// Issue one JSON-RPC call and decode its `result`.
  ///
  /// # Errors
  /// `Rpc` on transport failure, timeout, non-2xx status, an error
  /// object in the response, or a missing/undecodable result.
  pub async fn call<P, R>(&self, method: &str, params: P) -> Result<R>
  where
    P: Serialize + Send,
    R: DeserializeOwned + Send,
  {
    let id = self.next_id.fetch_add(1, Ordering::Relaxed);
    let request = RpcRequest {
      jsonrpc: "2.0",
      id,
      method,
      params,
    };

    debug!(method, id, "JSON-RPC request");

    let response = self.http.post(self.url.clone()).json(&request).send().await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      warn!(method, status = %status, "JSON-RPC HTTP error");
      return Err(ChainError::Rpc(format!("{method}: HTTP {status}: {body}")));
    }

    let envelope: RpcResponse<R> = response
      .json()
      .await
      .map_err(|e| ChainError::Rpc(format!("{method}: undecodable response: {e}")))?;

    if let Some(err) = envelope.error {
      let detail = err
        .data
        .map(|d| format!(" ({d})"))
        .unwrap_or_default();
      return Err(ChainError::Rpc(format!(
        "{method}: error {}: {}{detail}",
        err.code, err.message
      )));
    }

    envelope
      .result
      .ok_or_else(|| ChainError::Rpc(format!("{method}: response carried no result")))
  }
}

/// Parse an RPC endpoint URL.
pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url> {
  Url::parse(endpoint).map_err(|e| ChainError::InvalidEndpoint(format!("{endpoint}: {e}")))
}
