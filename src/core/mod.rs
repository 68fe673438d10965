//! Core business logic module
//!
//! This module contains the ledger orchestration component:
//! - `ledger` - Account collection, holder checks, and cross-account operations

pub mod ledger;

pub use ledger::{HistoryView, Ledger, LedgerConfig};
