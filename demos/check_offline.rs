//! Offline Check Demo
//!
//! Runs the full check flow against an in-memory node so the interpretation
//! can be seen without network access.

use alloy::primitives::{keccak256, Address, U256};
use anyhow::Result;
use async_trait::async_trait;
use mint_checker::{CheckerBuilder, MintStorageRpc};
use std::sync::Arc;
use tracing::{info, Level};

/// Node that always answers with the same storage string and balance.
struct CannedNode {
    storage: String,
    balance: U256,
}

#[async_trait]
impl MintStorageRpc for CannedNode {
    async fn mint_storage(&self, _address: Address) -> Result<String> {
        Ok(self.storage.clone())
    }

    async fn get_balance(&self, _address: Address) -> Result<U256> {
        Ok(self.balance)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    info!("Offline mint check demo");

    let node = CannedNode {
        storage: format!(
            "function mint(address to, 75000000000000000000000, 3000000000000000000) : 0x{:x}",
            keccak256(b"True")
        ),
        balance: U256::from(2_500_000_000_000_000_000u128),
    };

    let checker = CheckerBuilder::new().build_with_rpc(Arc::new(node));
    let address = "0x1111111111111111111111111111111111111111";

    let result = checker.check_contract(address).await?;
    let config = checker.config();

    println!(
        "{}",
        result.to_console(address, &config.native_symbol, &config.explorer_url(address))
    );

    // Invalid input never reaches the node
    if let Err(e) = checker.check_contract("0x1234").await {
        info!("Rejected as expected: {} ({})", e, e.category());
    }

    Ok(())
}
