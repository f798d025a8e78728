//! Checker module - mint status lookup for `mintStorage()` contracts.
//!
//! The only real logic is the response interpretation in [`interpreter`];
//! everything else wires it to an RPC node and renders the result.

pub mod types;
pub mod units;
pub mod interpreter;
pub mod rpc;
pub mod mint_checker;
pub mod report;

// Re-export main types
pub use types::{
    CheckError, CheckerConfig, InterpretedResult, MintStatus, DEFAULT_EXPLORER_BASE_URL,
    DEFAULT_RPC_URL,
};

// Re-export key components
pub use interpreter::{interpret, reference_hash};
pub use mint_checker::{check_contract, MintStatusChecker};
pub use rpc::{AlloyRpc, MintStorageRpc};
pub use units::format_ether;

use std::sync::Arc;
use std::time::Duration;

/// Checker builder for convenient construction with sensible defaults.
pub struct CheckerBuilder {
    config: CheckerConfig,
}

impl CheckerBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: CheckerConfig::default(),
        }
    }

    /// Set the RPC endpoint.
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.config.rpc_url = rpc_url.into();
        self
    }

    /// Set the per-request RPC timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.rpc_timeout_seconds = seconds;
        self
    }

    /// Set the native coin symbol used in reports.
    pub fn with_native_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.native_symbol = symbol.into();
        self
    }

    /// Set the block explorer address page prefix.
    pub fn with_explorer_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.explorer_base_url = url.into();
        self
    }

    pub fn build_config(self) -> CheckerConfig {
        self.config
    }

    /// Build a checker talking to the configured endpoint over HTTP.
    pub fn build(self) -> anyhow::Result<MintStatusChecker> {
        let rpc = AlloyRpc::new(
            &self.config.rpc_url,
            Duration::from_secs(self.config.rpc_timeout_seconds),
        )?;

        Ok(MintStatusChecker::new(Arc::new(rpc), self.config))
    }

    /// Build a checker around an existing RPC collaborator.
    pub fn build_with_rpc(self, rpc: Arc<dyn MintStorageRpc>) -> MintStatusChecker {
        MintStatusChecker::new(rpc, self.config)
    }
}

impl Default for CheckerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_builder() {
        let config = CheckerBuilder::new()
            .with_rpc_url("http://127.0.0.1:8545")
            .with_timeout(5)
            .with_native_symbol("ETH")
            .with_explorer_base_url("https://etherscan.io/address/")
            .build_config();

        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.rpc_timeout_seconds, 5);
        assert_eq!(config.native_symbol, "ETH");
        assert_eq!(config.explorer_url("0xabc"), "https://etherscan.io/address/0xabc");
    }

    #[test]
    fn test_checker_builder_defaults() {
        let config = CheckerBuilder::new().build_config();

        assert_eq!(config.rpc_url, "https://bsc-dataseed.binance.org/");
        assert_eq!(config.rpc_timeout_seconds, 30);
        assert_eq!(config.native_symbol, "BNB");
    }

    #[tokio::test]
    async fn test_build_rejects_empty_endpoint() {
        let checker = CheckerBuilder::new().with_rpc_url("").build();
        assert!(checker.is_err());
    }
}
