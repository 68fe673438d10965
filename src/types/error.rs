//! Error types for the bank ledger
//!
//! This module defines every way a ledger or account operation can be refused.
//! Errors are designed to be descriptive and user-friendly for console output.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: Account not found, duplicate account number
//! - **Access Errors**: Holder name mismatch, inactive account
//! - **Funds Errors**: Non-positive amount, overdraft limit exceeded
//! - **Arithmetic Errors**: Overflow in balance calculations
//!
//! Every error is local and non-fatal: the operation that detected it leaves
//! all account state unchanged.

use super::transaction::display_amount;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount supplied to deposit, withdraw, or transfer is zero or negative
    #[error("Invalid amount {}: amount must be positive", display_amount(*amount))]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Amount exceeds balance plus overdraft limit
    #[error(
        "Insufficient funds in account {account}: balance {}, overdraft limit {}, requested {}",
        display_amount(*balance),
        display_amount(*overdraft_limit),
        display_amount(*requested)
    )]
    InsufficientFunds {
        /// Account number
        account: String,
        /// Balance at the time of the request
        balance: Decimal,
        /// Overdraft limit of the account
        overdraft_limit: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Operation attempted against a deactivated account (source or target)
    #[error("Account {account} is inactive")]
    InactiveAccount {
        /// Account number of the inactive account
        account: String,
    },

    /// Referenced account number is absent from the ledger
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The account number that was looked up
        account: String,
    },

    /// Account creation requested for a number already in use
    #[error("Account number {account} already exists")]
    DuplicateAccount {
        /// The duplicated account number
        account: String,
    },

    /// Supplied holder name does not match the account's recorded name
    #[error("Authentication failed for account {account}")]
    AuthenticationFailed {
        /// Account number
        account: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to maintain account integrity.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: String,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(
        account: &str,
        balance: Decimal,
        overdraft_limit: Decimal,
        requested: Decimal,
    ) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            balance,
            overdraft_limit,
            requested,
        }
    }

    /// Create an InactiveAccount error
    pub fn inactive_account(account: &str) -> Self {
        LedgerError::InactiveAccount {
            account: account.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        LedgerError::AccountNotFound {
            account: account.to_string(),
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account: &str) -> Self {
        LedgerError::DuplicateAccount {
            account: account.to_string(),
        }
    }

    /// Create an AuthenticationFailed error
    pub fn authentication_failed(account: &str) -> Self {
        LedgerError::AuthenticationFailed {
            account: account.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }
}
