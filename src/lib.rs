//! mint-checker - `mintStorage()` status lookup for EVM contracts
//!
//! Queries a contract's `mintStorage()` view function and native balance over
//! JSON-RPC and interprets the returned string into a display-ready result.

pub mod types;
pub mod checker;

// Re-export main types for convenience
pub use types::CandidateAddress;
pub use checker::{
    check_contract, CheckError, CheckerBuilder, CheckerConfig, InterpretedResult,
    MintStatusChecker, MintStorageRpc,
};
