//! Interpretation of the `mintStorage()` response string.
//!
//! The response is an opaque, human-oriented string of the form
//! `"<parameters> : <hash>"`, where `<hash>` is keccak256("True") when minting
//! is enabled. Amounts appear as bare 10+ digit integers in smallest units.
//! Everything here is pure: the same inputs always give the same result.

use crate::checker::types::InterpretedResult;
use crate::checker::units::{format_ether, format_ether_digits};
use alloy::primitives::{keccak256, B256, U256};
use regex::Regex;
use tracing::debug;

/// Separator between the parameter text and the status hash.
pub const DELIMITER: &str = " : ";

/// Literal whose hash marks minting as enabled.
pub const ENABLED_LITERAL: &[u8] = b"True";

lazy_static::lazy_static! {
    /// Standalone runs of 10+ ASCII digits. Word boundaries are ASCII so a
    /// digit run glued to letters (e.g. inside a hex hash) never matches.
    static ref AMOUNT_PATTERN: Regex = Regex::new(r"(?-u:\b)[0-9]{10,}(?-u:\b)")
        .expect("amount pattern is a valid regex");
}

/// keccak256("True").
pub fn reference_hash() -> B256 {
    keccak256(ENABLED_LITERAL)
}

/// Last part of the response split on the delimiter, trimmed and without a
/// `0x` prefix.
///
/// Splitting runs left to right without overlap, so `"a : : b"` ends in
/// `": b"`. `None` when the response holds no delimiter at all.
pub fn extract_hash(raw: &str) -> Option<String> {
    let mut parts = raw.split(DELIMITER);
    parts.next()?;
    let tail = parts.last()?;
    Some(strip_hex_prefix(tail.trim()).to_string())
}

/// Compare two hex strings ignoring case and an optional `0x` prefix.
pub fn hashes_match(extracted: &str, reference: &str) -> bool {
    let extracted = strip_hex_prefix(extracted.trim());
    let reference = strip_hex_prefix(reference.trim());

    !extracted.is_empty() && extracted.eq_ignore_ascii_case(reference)
}

/// All standalone 10+ digit runs, left to right.
pub fn extract_amounts(raw: &str) -> Vec<&str> {
    AMOUNT_PATTERN.find_iter(raw).map(|m| m.as_str()).collect()
}

/// Build the full result from the raw response, the reference hash and the
/// contract balance in wei.
pub fn interpret(raw: &str, reference: B256, balance: U256) -> InterpretedResult {
    let reference_hash = format!("{reference:#x}");

    let extracted_hash = extract_hash(raw);
    let is_mint_enabled = extracted_hash
        .as_deref()
        .is_some_and(|hash| hashes_match(hash, &reference_hash));

    // Positional: first run is the primary amount, second the secondary one.
    let amounts = extract_amounts(raw);
    let (primary_amount_raw, secondary_amount_raw) = match amounts.as_slice() {
        [first, second, ..] => (Some(first.to_string()), Some(second.to_string())),
        _ => (None, None),
    };

    debug!(
        "Interpreted response: hash={:?}, enabled={}, amounts_found={}",
        extracted_hash,
        is_mint_enabled,
        amounts.len()
    );

    InterpretedResult {
        mint_params: raw.to_string(),
        extracted_hash,
        reference_hash,
        is_mint_enabled,
        primary_amount_scaled: primary_amount_raw.as_deref().map(format_ether_digits),
        secondary_amount_scaled: secondary_amount_raw.as_deref().map(format_ether_digits),
        primary_amount_raw,
        secondary_amount_raw,
        contract_balance: format_ether(balance),
    }
}

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
