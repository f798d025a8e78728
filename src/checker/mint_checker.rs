//! Mint status check orchestration.
//!
//! Validates the address, issues the two independent reads concurrently and
//! hands the raw data to the pure interpreter.

use crate::checker::interpreter::{interpret, ENABLED_LITERAL};
use crate::checker::rpc::MintStorageRpc;
use crate::checker::types::{CheckError, CheckerConfig, InterpretedResult};
use crate::types::CandidateAddress;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Check one contract address through `rpc`.
///
/// Invalid input fails with [`CheckError::InvalidAddress`] before any call is
/// made. Either read failing fails the whole check with
/// [`CheckError::RpcFailure`]; no partial result is returned and nothing is
/// retried.
#[instrument(skip(rpc))]
pub async fn check_contract<R>(address: &str, rpc: &R) -> Result<InterpretedResult, CheckError>
where
    R: MintStorageRpc + ?Sized,
{
    let candidate = match CandidateAddress::parse(address) {
        Ok(candidate) => candidate,
        Err(e) => {
            warn!("Rejected contract address {:?}", address);
            return Err(e);
        }
    };
    let target = candidate.address();

    let (raw, balance) = tokio::try_join!(rpc.mint_storage(target), rpc.get_balance(target))
        .map_err(|e| {
            error!("Error fetching contract data for {}: {:#}", candidate, e);
            CheckError::from(e)
        })?;

    let result = interpret(&raw, rpc.hash(ENABLED_LITERAL), balance);

    info!(
        "Checked {}: mint {}, balance {}",
        candidate,
        result.status().label(),
        result.contract_balance
    );

    Ok(result)
}

/// Mint checker bound to one RPC collaborator and configuration.
#[derive(Clone)]
pub struct MintStatusChecker {
    rpc: Arc<dyn MintStorageRpc>,
    config: CheckerConfig,
}

impl MintStatusChecker {
    pub fn new(rpc: Arc<dyn MintStorageRpc>, config: CheckerConfig) -> Self {
        Self { rpc, config }
    }

    /// Check one contract address.
    pub async fn check_contract(&self, address: &str) -> Result<InterpretedResult, CheckError> {
        check_contract(address, self.rpc.as_ref()).await
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }
}
