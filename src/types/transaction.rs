//! Transaction-related types for the bank ledger
//!
//! This module defines the entries recorded in an account's transaction
//! history, plus the display form shared by every amount shown to the user.

use rust_decimal::Decimal;
use std::fmt;

/// Account identifier
///
/// Opaque string chosen by the user at account creation.
pub type AccountNumber = String;

/// Render an amount the way the console shows it
///
/// Trailing zeros are dropped and an integral value keeps a single `.0`
/// suffix, so `100` prints as `100.0` and `-510.00` as `-510.0`.
pub fn display_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}

/// A single entry in an account's transaction history
///
/// Entries are append-only. The `Display` form is the human-readable log
/// line, and it is also the text that keyword filtering matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    /// Funds credited by a deposit (including the receiving side of a transfer)
    Deposited(Decimal),

    /// Funds debited by a withdrawal
    Withdrawn(Decimal),

    /// Funds sent to another account; recorded on the source only
    Transferred {
        /// Amount moved
        amount: Decimal,
        /// Receiving account
        target: AccountNumber,
    },

    /// Interest applied by an interest sweep (negative on overdrawn balances)
    InterestCredited(Decimal),
}

impl HistoryEntry {
    /// Case-insensitive substring match against the rendered entry
    ///
    /// `keyword_lower` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, keyword_lower: &str) -> bool {
        self.to_string().to_lowercase().contains(keyword_lower)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryEntry::Deposited(amount) => write!(f, "Deposited: {}", display_amount(*amount)),
            HistoryEntry::Withdrawn(amount) => write!(f, "Withdrawn: {}", display_amount(*amount)),
            HistoryEntry::Transferred { amount, target } => {
                write!(f, "Transferred: {} to {}", display_amount(*amount), target)
            }
            HistoryEntry::InterestCredited(amount) => {
                write!(f, "Interest credited: {}", display_amount(*amount))
            }
        }
    }
}
