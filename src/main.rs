//! Main entry point for the mint-checker command line tool
//!
//! Checks one address given as an argument, or keeps prompting on stdin until
//! an empty line or EOF.

use anyhow::{Context, Result};
use clap::Parser;
use mint_checker::checker::{DEFAULT_EXPLORER_BASE_URL, DEFAULT_RPC_URL};
use mint_checker::{CheckError, CheckerBuilder, InterpretedResult, MintStatusChecker};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, Level};

#[derive(Debug, Parser)]
#[command(name = "mint-checker", version)]
#[command(about = "Check whether a contract's mintStorage() reports minting as enabled")]
struct Args {
    /// Contract address (0x followed by 40 hex characters). Prompts when omitted.
    address: Option<String>,

    #[arg(long, env = "MINT_CHECKER_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    /// Per-request RPC timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Native coin symbol used in the report.
    #[arg(long, env = "MINT_CHECKER_SYMBOL", default_value = "BNB")]
    symbol: String,

    /// Block explorer address page; the address is appended.
    #[arg(long, env = "MINT_CHECKER_EXPLORER_URL", default_value = DEFAULT_EXPLORER_BASE_URL)]
    explorer_url: String,

    /// Print the result as JSON instead of a text report.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn checker_builder(&self) -> CheckerBuilder {
        CheckerBuilder::new()
            .with_rpc_url(self.rpc_url.clone())
            .with_timeout(self.timeout)
            .with_native_symbol(self.symbol.clone())
            .with_explorer_base_url(self.explorer_url.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so --json output stays machine readable
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let checker = args
        .checker_builder()
        .build()
        .context("Failed to set up RPC client")?;

    info!("Using RPC endpoint {}", args.rpc_url);

    match &args.address {
        Some(address) => {
            let result = checker.check_contract(address).await?;
            print_result(&checker, address, &result, args.json)?;
        }
        None => prompt_loop(&checker, args.json).await?,
    }

    Ok(())
}

/// Keep asking for an address until one checks successfully, the user enters
/// an empty line, or stdin closes.
async fn prompt_loop(checker: &MintStatusChecker, json: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"Enter the contract address: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("stdin closed");
            return Ok(());
        };

        let address = line.trim();
        if address.is_empty() {
            return Ok(());
        }

        match checker.check_contract(address).await {
            Ok(result) => {
                print_result(checker, address, &result, json)?;
                return Ok(());
            }
            Err(e @ CheckError::InvalidAddress { .. }) => {
                eprintln!("{e}. Please enter a valid contract address.");
            }
            Err(e @ CheckError::RpcFailure(_)) => {
                eprintln!("{e}");
            }
        }
    }
}

fn print_result(
    checker: &MintStatusChecker,
    address: &str,
    result: &InterpretedResult,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        let config = checker.config();
        println!(
            "{}",
            result.to_console(address, &config.native_symbol, &config.explorer_url(address))
        );
    }
    Ok(())
}
