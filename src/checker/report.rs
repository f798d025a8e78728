//! Plain-text rendering of a check result.

use crate::checker::types::InterpretedResult;

impl InterpretedResult {
    /// Copyable summary of the check, one field per line.
    ///
    /// Optional fields that are absent are left out rather than printed
    /// empty.
    pub fn to_report(&self, address: &str, symbol: &str) -> String {
        let mut lines = vec![
            format!("Contract Address: {address}"),
            format!("Mint Status: {}", self.status().label()),
            format!("Contract Balance: {} {symbol}", self.contract_balance),
        ];

        if let Some(amount) = &self.primary_amount_scaled {
            lines.push(format!("USDC Amount: {amount} USDC"));
        }
        if let Some(amount) = &self.secondary_amount_scaled {
            lines.push(format!("Max {symbol}: {amount} {symbol}"));
        }

        lines.push(format!("Mint Parameters: {}", self.mint_params));

        if let Some(hash) = &self.extracted_hash {
            lines.push(format!("Extracted Keccak Hash: {hash}"));
        }
        lines.push(format!("Keccak(True): {}", self.reference_hash));

        if let Some(amount) = &self.primary_amount_raw {
            lines.push(format!("USDC Amount (Wei): {amount}"));
        }
        if let Some(amount) = &self.secondary_amount_raw {
            lines.push(format!("Max {symbol} (Wei): {amount}"));
        }

        lines.join("\n")
    }

    /// Human-oriented console output: status line first, then the report.
    pub fn to_console(&self, address: &str, symbol: &str, explorer_url: &str) -> String {
        let marker = if self.is_mint_enabled { "[+]" } else { "[-]" };

        format!(
            "{marker} {}\n\n{}\nExplorer: {explorer_url}",
            self.status().headline(),
            self.to_report(address, symbol)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(enabled: bool, with_amounts: bool) -> InterpretedResult {
        InterpretedResult {
            mint_params: "params : abcd".to_string(),
            extracted_hash: Some("abcd".to_string()),
            reference_hash: "0xfeed".to_string(),
            is_mint_enabled: enabled,
            primary_amount_raw: with_amounts.then(|| "50000000000000000000".to_string()),
            secondary_amount_raw: with_amounts.then(|| "1000000000000000000".to_string()),
            primary_amount_scaled: with_amounts.then(|| "50.0".to_string()),
            secondary_amount_scaled: with_amounts.then(|| "1.0".to_string()),
            contract_balance: "2.5".to_string(),
        }
    }

    #[test]
    fn test_report_with_amounts() {
        let report = sample(true, true).to_report("0xabc", "BNB");

        assert_eq!(
            report,
            "Contract Address: 0xabc\n\
             Mint Status: Enabled\n\
             Contract Balance: 2.5 BNB\n\
             USDC Amount: 50.0 USDC\n\
             Max BNB: 1.0 BNB\n\
             Mint Parameters: params : abcd\n\
             Extracted Keccak Hash: abcd\n\
             Keccak(True): 0xfeed\n\
             USDC Amount (Wei): 50000000000000000000\n\
             Max BNB (Wei): 1000000000000000000"
        );
    }

    #[test]
    fn test_report_skips_missing_fields() {
        let mut result = sample(false, false);
        result.extracted_hash = None;

        let report = result.to_report("0xabc", "BNB");

        assert!(report.contains("Mint Status: Not Enabled"));
        assert!(!report.contains("USDC"));
        assert!(!report.contains("Extracted Keccak Hash"));
        assert!(!report.contains("\n\n"));
    }

    #[test]
    fn test_console_output() {
        let out = sample(true, false).to_console("0xabc", "BNB", "https://bscscan.com/address/0xabc");

        assert_eq!(
            out,
            "[+] Mint is enabled\n\n\
             Contract Address: 0xabc\n\
             Mint Status: Enabled\n\
             Contract Balance: 2.5 BNB\n\
             Mint Parameters: params : abcd\n\
             Extracted Keccak Hash: abcd\n\
             Keccak(True): 0xfeed\n\
             Explorer: https://bscscan.com/address/0xabc"
        );
    }
}
