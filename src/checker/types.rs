//! Result, error and configuration types for the mint checker.

use serde::{Deserialize, Serialize};

/// Default public RPC endpoint for BNB Smart Chain.
pub const DEFAULT_RPC_URL: &str = "https://bsc-dataseed.binance.org/";

/// Default block explorer address page.
pub const DEFAULT_EXPLORER_BASE_URL: &str = "https://bscscan.com/address/";

/// Failure of a single contract check.
///
/// Remote failures are deliberately collapsed into one category: a missing
/// `mintStorage` function, a reverted call and an unreachable node all surface
/// as [`CheckError::RpcFailure`]. The cause is kept as the error source.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Invalid BNB contract address")]
    InvalidAddress { input: String },

    #[error("Error fetching contract data. Please check the contract address and try again.")]
    RpcFailure(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl CheckError {
    /// Short category name suitable for display or metrics labels.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidAddress { .. } => "InvalidAddress",
            Self::RpcFailure(_) => "RpcFailure",
        }
    }
}

impl From<anyhow::Error> for CheckError {
    fn from(err: anyhow::Error) -> Self {
        Self::RpcFailure(err.into())
    }
}

/// Whether minting is enabled, as derived from the hash comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MintStatus {
    Enabled,
    NotEnabled,
}

impl MintStatus {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            MintStatus::Enabled
        } else {
            MintStatus::NotEnabled
        }
    }

    /// Short label used in the copyable report.
    pub fn label(&self) -> &'static str {
        match self {
            MintStatus::Enabled => "Enabled",
            MintStatus::NotEnabled => "Not Enabled",
        }
    }

    /// Sentence used for the status line.
    pub fn headline(&self) -> &'static str {
        match self {
            MintStatus::Enabled => "Mint is enabled",
            MintStatus::NotEnabled => "Mint is not enabled",
        }
    }
}

/// Interpreted `mintStorage()` response for one contract.
///
/// Every field is display-ready. The amount fields are populated from the
/// first two 10+ digit runs in the raw response, purely by position: if the
/// upstream format ever reorders them the values will be misattributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedResult {
    /// Raw `mintStorage()` return value, verbatim
    pub mint_params: String,
    /// Hash fragment after the final `" : "`, trimmed, without `0x`
    pub extracted_hash: Option<String>,
    /// keccak256("True"), `0x`-prefixed lowercase hex
    pub reference_hash: String,
    /// True iff `extracted_hash` matches `reference_hash`
    pub is_mint_enabled: bool,
    /// First 10+ digit run (smallest unit)
    pub primary_amount_raw: Option<String>,
    /// Second 10+ digit run (smallest unit)
    pub secondary_amount_raw: Option<String>,
    /// `primary_amount_raw` scaled by 10^18
    pub primary_amount_scaled: Option<String>,
    /// `secondary_amount_raw` scaled by 10^18
    pub secondary_amount_scaled: Option<String>,
    /// Native balance of the contract scaled by 10^18
    pub contract_balance: String,
}

impl InterpretedResult {
    pub fn status(&self) -> MintStatus {
        MintStatus::from_enabled(self.is_mint_enabled)
    }
}

/// Checker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// JSON-RPC endpoint
    pub rpc_url: String,
    /// HTTP timeout for each RPC request in seconds
    pub rpc_timeout_seconds: u64,
    /// Symbol of the chain's native coin, used in reports
    pub native_symbol: String,
    /// Explorer page prefix; the address is appended
    pub explorer_base_url: String,
}

impl CheckerConfig {
    /// Explorer link for `address`.
    pub fn explorer_url(&self, address: &str) -> String {
        format!("{}{}", self.explorer_base_url, address)
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            rpc_timeout_seconds: 30,
            native_symbol: "BNB".to_string(),
            explorer_base_url: DEFAULT_EXPLORER_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let invalid = CheckError::InvalidAddress { input: "0x12".to_string() };
        let rpc: CheckError = anyhow::anyhow!("connection refused").into();

        assert_eq!(invalid.category(), "InvalidAddress");
        assert_eq!(rpc.category(), "RpcFailure");
        assert_eq!(invalid.to_string(), "Invalid BNB contract address");
        assert!(rpc.to_string().starts_with("Error fetching contract data"));
    }

    #[test]
    fn test_rpc_failure_keeps_cause() {
        let rpc: CheckError = anyhow::anyhow!("execution reverted").into();
        let source = std::error::Error::source(&rpc).expect("source is kept");

        assert!(source.to_string().contains("execution reverted"));
    }

    #[test]
    fn test_config_defaults() {
        let config = CheckerConfig::default();

        assert_eq!(config.rpc_url, "https://bsc-dataseed.binance.org/");
        assert_eq!(config.rpc_timeout_seconds, 30);
        assert_eq!(config.native_symbol, "BNB");
        assert_eq!(
            config.explorer_url("0x1111111111111111111111111111111111111111"),
            "https://bscscan.com/address/0x1111111111111111111111111111111111111111"
        );
    }

    #[test]
    fn test_mint_status_labels() {
        assert_eq!(MintStatus::from_enabled(true), MintStatus::Enabled);
        assert_eq!(MintStatus::Enabled.headline(), "Mint is enabled");
        assert_eq!(MintStatus::NotEnabled.label(), "Not Enabled");
    }
}
