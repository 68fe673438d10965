//! Account-related types for the bank ledger
//!
//! This module defines the Account structure and the per-account operations
//! that enforce account-level invariants:
//! - `balance >= -overdraft_limit` after every deposit, withdrawal, and transfer
//! - the transaction history only grows, in insertion order
//! - an inactive account refuses every balance-changing request

use super::error::LedgerError;
use super::transaction::{AccountNumber, HistoryEntry};
use rust_decimal::Decimal;
use std::fmt;

/// Kind of account, fixed at creation
///
/// The type is whatever the user typed. "Savings" and "Checking" get their own
/// variants; anything else is kept verbatim in `Other`. Matching is exact, so
/// only "Savings" accrues interest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountType {
    Savings,
    Checking,
    Other(String),
}

impl AccountType {
    /// Whether interest sweeps apply to this account type
    pub fn accrues_interest(&self) -> bool {
        matches!(self, AccountType::Savings)
    }
}

impl From<&str> for AccountType {
    fn from(value: &str) -> Self {
        match value {
            "Savings" => AccountType::Savings,
            "Checking" => AccountType::Checking,
            other => AccountType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Savings => f.write_str("Savings"),
            AccountType::Checking => f.write_str("Checking"),
            AccountType::Other(name) => f.write_str(name),
        }
    }
}

/// A single bank account
///
/// Identity fields (number, holder, type, overdraft limit) are fixed at
/// creation. Balance and history change only through the operations below,
/// each of which either applies fully or leaves the account untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    holder_name: String,
    account_type: AccountType,
    balance: Decimal,
    overdraft_limit: Decimal,
    active: bool,
    history: Vec<HistoryEntry>,
}

impl Account {
    /// Create a new active account with zero balance and empty history
    pub fn new(
        number: impl Into<AccountNumber>,
        holder_name: impl Into<String>,
        account_type: AccountType,
        overdraft_limit: Decimal,
    ) -> Self {
        Account {
            number: number.into(),
            holder_name: holder_name.into(),
            account_type,
            balance: Decimal::ZERO,
            overdraft_limit,
            active: true,
            history: Vec::new(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_type(&self) -> &AccountType {
        &self.account_type
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Exact, case-sensitive comparison against the recorded holder name
    ///
    /// This is a usability check, not a security boundary.
    pub fn holder_matches(&self, supplied_name: &str) -> bool {
        self.holder_name == supplied_name
    }

    /// Deposit funds into the account
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InactiveAccount` if the account is deactivated
    /// - `ArithmeticOverflow` if the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.ensure_positive(amount)?;
        self.ensure_active()?;

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", &self.number))?;

        self.balance = new_balance;
        self.history.push(HistoryEntry::Deposited(amount));

        Ok(new_balance)
    }

    /// Withdraw funds, allowing the balance to go negative down to the overdraft limit
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InactiveAccount` if the account is deactivated
    /// - `InsufficientFunds` if `amount > balance + overdraft_limit`
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.ensure_positive(amount)?;
        self.ensure_active()?;

        let new_balance = self.debit_within_overdraft(amount, "withdrawal")?;

        self.balance = new_balance;
        self.history.push(HistoryEntry::Withdrawn(amount));

        Ok(new_balance)
    }

    /// Move funds from this account into `target`
    ///
    /// The target is credited through its own [`Account::deposit`], so it
    /// records its own `Deposited` entry; this account records a single
    /// `Transferred` entry. All preconditions are checked before either
    /// side is mutated.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InactiveAccount` if this account, then the target, is deactivated
    /// - `InsufficientFunds` if `amount > balance + overdraft_limit`
    /// - `ArithmeticOverflow` if either balance would overflow
    pub fn transfer(&mut self, target: &mut Account, amount: Decimal) -> Result<(), LedgerError> {
        self.ensure_positive(amount)?;
        self.ensure_active()?;
        target.ensure_active()?;

        let new_balance = self.debit_within_overdraft(amount, "transfer")?;

        // Only fails on overflow, before anything here has changed
        target.deposit(amount)?;

        self.balance = new_balance;
        self.history.push(HistoryEntry::Transferred {
            amount,
            target: target.number.clone(),
        });

        Ok(())
    }

    /// Transfer from this account to itself
    ///
    /// Runs the same checks as [`Account::transfer`] against the one account.
    /// The balance nets to zero while the history gains the receiving
    /// `Deposited` entry followed by the `Transferred` entry.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InactiveAccount` if the account is deactivated
    /// - `InsufficientFunds` if `amount > balance + overdraft_limit`
    pub fn transfer_to_self(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.ensure_positive(amount)?;
        self.ensure_active()?;
        self.debit_within_overdraft(amount, "transfer")?;

        self.history.push(HistoryEntry::Deposited(amount));
        self.history.push(HistoryEntry::Transferred {
            amount,
            target: self.number.clone(),
        });

        Ok(())
    }

    /// Apply one interest cycle at `rate`
    ///
    /// Savings accounts are credited `balance * rate` whether or not they are
    /// active. An overdrawn balance yields negative interest, which is applied
    /// even when it takes the balance past the overdraft limit.
    ///
    /// # Returns
    ///
    /// `Some(interest)` for savings accounts, `None` for checking accounts.
    pub fn calculate_interest(&mut self, rate: Decimal) -> Result<Option<Decimal>, LedgerError> {
        if !self.account_type.accrues_interest() {
            return Ok(None);
        }

        let interest = self
            .balance
            .checked_mul(rate)
            .ok_or_else(|| LedgerError::arithmetic_overflow("interest", &self.number))?;

        let new_balance = self
            .balance
            .checked_add(interest)
            .ok_or_else(|| LedgerError::arithmetic_overflow("interest", &self.number))?;

        self.balance = new_balance;
        self.history.push(HistoryEntry::InterestCredited(interest));

        Ok(Some(interest))
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn reactivate(&mut self) {
        self.active = true;
    }

    /// Full history in insertion order
    pub fn transaction_history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Entries whose text contains `keyword`, case-insensitively, in original order
    pub fn filtered_transaction_history(&self, keyword: &str) -> Vec<&HistoryEntry> {
        let keyword = keyword.to_lowercase();
        self.history
            .iter()
            .filter(|entry| entry.matches_lowercase(&keyword))
            .collect()
    }

    fn ensure_positive(&self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), LedgerError> {
        if !self.active {
            return Err(LedgerError::inactive_account(&self.number));
        }
        Ok(())
    }

    /// Balance after debiting `amount`, if the overdraft limit allows it
    fn debit_within_overdraft(&self, amount: Decimal, operation: &str) -> Result<Decimal, LedgerError> {
        let spendable = self
            .balance
            .checked_add(self.overdraft_limit)
            .ok_or_else(|| LedgerError::arithmetic_overflow(operation, &self.number))?;

        if amount > spendable {
            return Err(LedgerError::insufficient_funds(
                &self.number,
                self.balance,
                self.overdraft_limit,
                amount,
            ));
        }

        self.balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow(operation, &self.number))
    }
}
