//! Core types shared by the mint checker.

use crate::checker::types::CheckError;
use alloy::primitives::Address;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static::lazy_static! {
    /// `0x` followed by exactly 40 hex characters, either case.
    static ref ADDRESS_PATTERN: Regex = Regex::new(r"^0x[a-fA-F0-9]{40}$")
        .expect("address pattern is a valid regex");
}

/// A contract address entered by the user, validated for format only.
///
/// No checksum verification happens here: mixed-case input that fails
/// EIP-55 is still accepted, matching what the chain itself accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateAddress {
    /// The text exactly as entered
    raw: String,
    /// Parsed 20-byte address
    address: Address,
}

impl CandidateAddress {
    /// Validate `input` against the address pattern.
    pub fn parse(input: &str) -> Result<Self, CheckError> {
        if !is_valid_address(input) {
            return Err(CheckError::InvalidAddress {
                input: input.to_string(),
            });
        }

        let address = Address::from_str(input).map_err(|_| CheckError::InvalidAddress {
            input: input.to_string(),
        })?;

        Ok(Self {
            raw: input.to_string(),
            address,
        })
    }

    /// The text exactly as the user entered it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl fmt::Display for CandidateAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Returns true iff `input` is `0x` followed by 40 hex characters.
pub fn is_valid_address(input: &str) -> bool {
    ADDRESS_PATTERN.is_match(input)
}
