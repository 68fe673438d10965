use crate::core::LedgerConfig;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Interactive in-memory bank ledger
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Interactive in-memory bank ledger simulation", long_about = None)]
pub struct CliArgs {
    /// Replay a session from a file instead of reading stdin
    #[arg(long = "input", value_name = "FILE", help = "Read menu input from FILE")]
    pub input_file: Option<PathBuf>,

    /// Overdraft limit given to newly created accounts
    #[arg(
        long = "overdraft-limit",
        value_name = "AMOUNT",
        allow_negative_numbers = true,
        help = "Overdraft limit for new accounts (default: 500.0)"
    )]
    pub overdraft_limit: Option<Decimal>,

    /// Interest rate applied to savings accounts per interest cycle
    #[arg(
        long = "interest-rate",
        value_name = "RATE",
        allow_negative_numbers = true,
        help = "Interest rate per cycle for savings accounts (default: 0.02)"
    )]
    pub interest_rate: Option<Decimal>,

    /// Write a CSV summary of all accounts to stdout on exit
    #[arg(long = "summary", help = "Print a CSV account summary when the session ends")]
    pub summary: bool,

    /// Default log filter, used when RUST_LOG is unset
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log filter when RUST_LOG is unset (e.g. 'info', 'bank_ledger=debug')"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Create a LedgerConfig from CLI arguments
    ///
    /// Missing values fall back to the defaults; invalid values are replaced
    /// by `LedgerConfig::new` with a warning.
    pub fn to_ledger_config(&self) -> LedgerConfig {
        if self.overdraft_limit.is_some() || self.interest_rate.is_some() {
            let default = LedgerConfig::default();
            LedgerConfig::new(
                self.overdraft_limit.unwrap_or(default.overdraft_limit),
                self.interest_rate.unwrap_or(default.interest_rate),
            )
        } else {
            LedgerConfig::default()
        }
    }
}
