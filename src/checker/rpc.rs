//! RPC collaborator for the mint checker.
//!
//! The checker only needs two read-only calls and a hash function, so the
//! node is reached through the narrow [`MintStorageRpc`] trait. [`AlloyRpc`]
//! is the production implementation over HTTP JSON-RPC.

use alloy::primitives::{keccak256, Address, B256, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::sol;
use alloy::transports::http::Http;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info, instrument};

sol! {
    #[sol(rpc)]
    interface IMintStorage {
        function mintStorage() external view returns (string memory);
    }
}

/// Capabilities the checker needs from a blockchain node.
#[async_trait]
pub trait MintStorageRpc: Send + Sync {
    /// Call the zero-argument view function `mintStorage()` on `address`.
    async fn mint_storage(&self, address: Address) -> Result<String>;

    /// Native coin balance of `address` in the smallest unit.
    async fn get_balance(&self, address: Address) -> Result<U256>;

    /// The chain's one-way hash.
    fn hash(&self, data: &[u8]) -> B256 {
        keccak256(data)
    }
}

/// HTTP JSON-RPC implementation backed by alloy.
pub struct AlloyRpc {
    provider: DynProvider,
    endpoint: String,
}

impl AlloyRpc {
    /// Connect to `endpoint` with a per-request HTTP timeout.
    ///
    /// No request is sent here; the first network activity happens on the
    /// first call.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        if endpoint.trim().is_empty() {
            return Err(anyhow!("RPC endpoint is required"));
        }

        let url: Url = endpoint
            .parse()
            .with_context(|| format!("Invalid RPC endpoint URL: {endpoint}"))?;

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let transport = Http::with_client(http_client, url);
        let client = RpcClient::new(transport, false);
        let provider = ProviderBuilder::new().connect_client(client).erased();

        info!("Created RPC client for {} (timeout {}s)", endpoint, timeout.as_secs());

        Ok(Self {
            provider,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MintStorageRpc for AlloyRpc {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn mint_storage(&self, address: Address) -> Result<String> {
        let contract = IMintStorage::new(address, self.provider.clone());

        let value = contract
            .mintStorage()
            .call()
            .await
            .with_context(|| format!("mintStorage() call failed for {address}"))?;

        debug!("mintStorage() returned {} bytes", value.len());
        Ok(value)
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn get_balance(&self, address: Address) -> Result<U256> {
        let balance = self
            .provider
            .get_balance(address)
            .await
            .with_context(|| format!("Failed to fetch balance of {address}"))?;

        debug!("Balance of {}: {} wei", address, balance);
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_alloy_rpc_creation() {
        let rpc = AlloyRpc::new("https://bsc-dataseed.binance.org/", Duration::from_secs(5));

        assert!(rpc.is_ok());
        assert_eq!(rpc.unwrap().endpoint(), "https://bsc-dataseed.binance.org/");
    }

    #[test]
    fn test_alloy_rpc_rejects_bad_endpoints() {
        assert!(AlloyRpc::new("", Duration::from_secs(5)).is_err());
        assert!(AlloyRpc::new("not a url", Duration::from_secs(5)).is_err());
    }

    #[test]
    fn test_mint_storage_selector() {
        use alloy::sol_types::SolCall;

        let signature_hash = keccak256("mintStorage()");
        assert_eq!(
            IMintStorage::mintStorageCall::SELECTOR.as_slice(),
            &signature_hash.as_slice()[..4]
        );
    }
}
