//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state and per-account operations
//! - `transaction`: Transaction history entries and amount display
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountType};
pub use error::LedgerError;
pub use transaction::{display_amount, AccountNumber, HistoryEntry};
