//! Bank Ledger Library
//! # Overview
//!
//! This library provides an in-memory, single-process bank ledger driven by
//! an interactive menu shell. Nothing is persisted across runs.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, HistoryEntry, LedgerError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account collection and cross-account operations
//! - [`shell`] - Interactive menu loop rendering ledger results
//! - [`io`] - Session input and CSV account summary
//! - [`logging`] - Tracing subscriber setup
//!
//! # Operations
//!
//! - **Deposit**: Credit a positive amount to an active account
//! - **Withdraw**: Debit an active account, down to its overdraft limit
//! - **Transfer**: Debit one active account and deposit into another
//! - **Interest**: Credit `balance * rate` to every savings account
//! - **Deactivate/Reactivate**: Toggle whether an account accepts changes
//!
//! # Account States
//!
//! Each account maintains:
//! - `balance`: May go negative down to `-overdraft_limit`
//! - `overdraft_limit`: Fixed at creation (default 500.0)
//! - `active`: Inactive accounts refuse deposits, withdrawals, and transfers
//! - `history`: Append-only log of human-readable entries

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod shell;
pub mod types;

pub use core::{HistoryView, Ledger, LedgerConfig};
pub use io::write_accounts_csv;
pub use shell::{MenuChoice, Shell, ShellError};
pub use types::{
    display_amount, Account, AccountNumber, AccountType, HistoryEntry, LedgerError,
};
