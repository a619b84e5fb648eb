//! EVM Adapter - alloy-rs 0.9 JSON-RPC for Ethereum-family Chains
//!
//! One adapter serves Ethereum, Polygon and Avalanche; the networks
//! differ only by their `EvmNetwork` value (chain id, decimals).
//!
//! `ProviderBuilder::new().on_http()` is synchronous, so construction
//! never touches the network. The provider is stored type-erased as
//! `dyn Provider` over the HTTP transport.

use std::str::FromStr;
use std::sync::Arc;

use alloy::consensus::{Transaction as _, TxEnvelope};
use alloy::eips::eip2718::Decodable2718;
use alloy::primitives::Address;
use alloy::primitives::utils::format_units;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::transports::http::{Client, Http};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use super::jsonrpc::parse_endpoint;
use crate::domain::{
    Balance, ChainError, ChainKind, EvmNetwork, Result, SignedTransaction, TxHandle,
    trim_decimal,
};
use crate::ports::ChainAdapter;

/// Provider over alloy's reqwest HTTP transport.
type HttpProvider = Arc<dyn Provider<Http<Client>> + Send + Sync>;

/// Balance and raw-transaction adapter for any EVM network.
pub struct EvmAdapter {
    /// Network parameters (chain id, decimals).
    network: EvmNetwork,
    /// The alloy HTTP provider (type-erased).
    provider: HttpProvider,
}

impl EvmAdapter {
    /// Build an adapter for `network` backed by the JSON-RPC endpoint at `rpc_url`.
    ///
    /// # Errors
    /// Returns `InvalidEndpoint` if `rpc_url` is not a valid URL.
    pub fn connect(network: EvmNetwork, rpc_url: &str) -> Result<Self> {
        let url = parse_endpoint(rpc_url)?;

        // alloy 0.9: on_http() is synchronous, returns impl Provider
        let provider = ProviderBuilder::new().on_http(url);
        let provider: HttpProvider = Arc::new(provider);

        debug!(
            chain = %network.chain,
            chain_id = network.chain_id,
            "EVM provider created"
        );

        Ok(Self { network, provider })
    }

    /// Network parameters this adapter was built with.
    pub const fn network(&self) -> &EvmNetwork {
        &self.network
    }

    /// Parse a hex account address.
    ///
    /// Mixed-case input must carry a valid EIP-55 checksum; all-lowercase
    /// and all-uppercase hex are accepted as-is.
    fn parse_address(&self, address: &str) -> Result<Address> {
        let digits = address.strip_prefix("0x").unwrap_or(address);
        let mixed_case = digits.chars().any(|c| c.is_ascii_lowercase())
            && digits.chars().any(|c| c.is_ascii_uppercase());

        let parsed = if mixed_case {
            Address::parse_checksummed(address, None).map_err(|e| e.to_string())
        } else {
            Address::from_str(address).map_err(|e| e.to_string())
        };
        parsed.map_err(|reason| ChainError::invalid_address(self.network.chain, address, reason))
    }

    /// Reject signed transactions whose embedded chain id targets another network.
    ///
    /// Pre-EIP-155 legacy transactions carry no chain id and are accepted.
    fn check_chain_id(&self, tx: &SignedTransaction) -> Result<()> {
        let mut raw = tx.as_bytes();
        let envelope = TxEnvelope::decode_2718(&mut raw).map_err(|e| {
            ChainError::InvalidTransaction(format!("not an EIP-2718 transaction: {e}"))
        })?;

        match envelope.chain_id() {
            Some(found) if found != self.network.chain_id => {
                warn!(
                    expected = self.network.chain_id,
                    found,
                    "Rejecting transaction signed for another chain"
                );
                Err(ChainError::ChainIdMismatch {
                    expected: self.network.chain_id,
                    found,
                })
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ChainAdapter for EvmAdapter {
    fn chain(&self) -> ChainKind {
        self.network.chain
    }

    fn chain_id(&self) -> Option<u64> {
        Some(self.network.chain_id)
    }

    #[instrument(skip(self), fields(chain = %self.network.chain))]
    async fn get_balance(&self, address: &str) -> Result<Balance> {
        let account = self.parse_address(address)?;

        let wei = self
            .provider
            .get_balance(account)
            .await
            .map_err(|e| ChainError::Rpc(format!("eth_getBalance failed: {e}")))?;

        let formatted = format_units(wei, self.network.decimals)
            .map_err(|e| ChainError::Rpc(format!("cannot format balance {wei}: {e}")))?;
        let balance = trim_decimal(&formatted);

        debug!(%balance, symbol = self.network.symbol, "Balance fetched");
        Ok(Balance::Decimal(balance))
    }

    #[instrument(skip(self, tx), fields(chain = %self.network.chain, len = tx.as_bytes().len()))]
    async fn send_transaction(&self, tx: &SignedTransaction) -> Result<TxHandle> {
        self.check_chain_id(tx)?;

        let pending = self
            .provider
            .send_raw_transaction(tx.as_bytes())
            .await
            .map_err(|e| ChainError::Rpc(format!("eth_sendRawTransaction failed: {e}")))?;

        let hash = pending.tx_hash().to_string();
        info!(tx_hash = %hash, "Raw transaction broadcast");
        Ok(TxHandle::new(hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// EIP-155 example transaction (chain id 1, nonce 9, 1 ether).
    const MAINNET_SIGNED_TX: &str = "0xf86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83";

    #[test]
    fn test_connect_rejects_bad_url() {
        let result = EvmAdapter::connect(EvmNetwork::ETHEREUM, "::not-a-url::");
        assert!(matches!(result, Err(ChainError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_chain_identity() {
        let adapter = EvmAdapter::connect(EvmNetwork::AVALANCHE, "http://127.0.0.1:9").unwrap();
        assert_eq!(adapter.chain(), ChainKind::Avalanche);
        assert_eq!(adapter.chain_id(), Some(43_114));
        assert_eq!(adapter.network().decimals, 18);
    }

    #[test]
    fn test_connect_every_evm_network() {
        for network in [EvmNetwork::ETHEREUM, EvmNetwork::POLYGON, EvmNetwork::AVALANCHE] {
            let adapter = EvmAdapter::connect(network, "http://127.0.0.1:9").unwrap();
            assert_eq!(adapter.chain(), network.chain);
            assert_eq!(adapter.chain_id(), Some(network.chain_id));
        }
    }

    #[test]
    fn test_address_checksum_rules() {
        let adapter = EvmAdapter::connect(EvmNetwork::ETHEREUM, "http://127.0.0.1:9").unwrap();

        // EIP-55 reference address in its checksummed, lower and upper forms
        assert!(adapter.parse_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_ok());
        assert!(adapter.parse_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").is_ok());
        assert!(adapter.parse_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").is_ok());

        let err = adapter
            .parse_address("0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed")
            .unwrap_err();
        assert!(matches!(
            err,
            ChainError::InvalidAddress {
                chain: ChainKind::Ethereum,
                ..
            }
        ));
    }

    #[test]
    fn test_chain_id_guard_accepts_matching_network() {
        let adapter = EvmAdapter::connect(EvmNetwork::ETHEREUM, "http://127.0.0.1:9").unwrap();
        let tx = SignedTransaction::from_hex(MAINNET_SIGNED_TX).unwrap();
        assert!(adapter.check_chain_id(&tx).is_ok());
    }

    #[test]
    fn test_chain_id_guard_rejects_other_network() {
        let adapter = EvmAdapter::connect(EvmNetwork::POLYGON, "http://127.0.0.1:9").unwrap();
        let tx = SignedTransaction::from_hex(MAINNET_SIGNED_TX).unwrap();
        assert!(matches!(
            adapter.check_chain_id(&tx),
            Err(ChainError::ChainIdMismatch {
                expected: 137,
                found: 1
            })
        ));
    }

    #[test]
    fn test_chain_id_guard_rejects_garbage() {
        let adapter = EvmAdapter::connect(EvmNetwork::ETHEREUM, "http://127.0.0.1:9").unwrap();
        let tx = SignedTransaction::from_bytes(vec![0x01, 0x02]);
        assert!(matches!(
            adapter.check_chain_id(&tx),
            Err(ChainError::InvalidTransaction(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_address_fails_before_rpc() {
        // Nothing listens on port 9; an RPC attempt would surface as `Rpc`.
        let adapter = EvmAdapter::connect(EvmNetwork::ETHEREUM, "http://127.0.0.1:9").unwrap();
        let err = adapter.get_balance("0x1234").await.unwrap_err();
        assert!(matches!(
            err,
            ChainError::InvalidAddress {
                chain: ChainKind::Ethereum,
                ..
            }
        ));
    }
}
