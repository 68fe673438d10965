//! CSV format handling for the account summary
//!
//! This module centralizes the CSV output concerns, providing:
//! - SummaryRecord structure for serialization
//! - Conversion from accounts to summary records
//! - Account summary serialization
//!
//! All functions are pure apart from writing to the supplied writer.

use crate::types::{display_amount, Account};
use serde::Serialize;
use std::io::Write;

/// CSV record structure for serialization
///
/// Columns: account, holder, type, balance, overdraft_limit, active
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SummaryRecord {
    pub account: String,
    pub holder: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub balance: String,
    pub overdraft_limit: String,
    pub active: bool,
}

impl From<&Account> for SummaryRecord {
    fn from(account: &Account) -> Self {
        SummaryRecord {
            account: account.number().to_string(),
            holder: account.holder_name().to_string(),
            account_type: account.account_type().to_string(),
            balance: display_amount(account.balance()),
            overdraft_limit: display_amount(account.overdraft_limit()),
            active: account.is_active(),
        }
    }
}

/// Write account states to CSV format
///
/// Accounts are sorted by account number for deterministic output.
///
/// # Arguments
///
/// * `accounts` - Accounts to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_accounts_csv(accounts: &[&Account], output: &mut dyn Write) -> Result<(), String> {
    use csv::WriterBuilder;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);

    // Written explicitly so an empty ledger still gets a header
    writer
        .write_record([
            "account",
            "holder",
            "type",
            "balance",
            "overdraft_limit",
            "active",
        ])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by(|a, b| a.number().cmp(b.number()));

    for account in sorted_accounts {
        writer
            .serialize(SummaryRecord::from(account))
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
