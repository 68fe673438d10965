//! Ledger orchestration module
//!
//! This module provides the `Ledger`, which owns every account keyed by
//! account number and orchestrates the operations that span one or two
//! accounts.
//!
//! The Ledger is responsible for:
//! - Creating accounts with unique numbers
//! - Checking account existence, then the holder name, before delegating
//! - Routing deposits, withdrawals, and transfers to the `Account` operations
//! - Running the interest sweep across every account
//!
//! All state lives in the Ledger value itself, so independent ledgers can
//! coexist in one process.

use crate::types::{Account, AccountNumber, AccountType, HistoryEntry, LedgerError};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Configuration applied to a ledger
///
/// Controls the overdraft limit given to newly created accounts and the
/// rate applied by each interest sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerConfig {
    /// Overdraft limit for accounts created from now on
    pub overdraft_limit: Decimal,
    /// Interest rate per interest cycle for savings accounts
    pub interest_rate: Decimal,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            overdraft_limit: Decimal::new(500, 0),
            interest_rate: Decimal::new(2, 2),
        }
    }
}

impl LedgerConfig {
    /// Create a new LedgerConfig with custom values
    ///
    /// Negative values fall back to the defaults with a warning.
    pub fn new(overdraft_limit: Decimal, interest_rate: Decimal) -> Self {
        let default = Self::default();

        let overdraft_limit = if overdraft_limit < Decimal::ZERO {
            warn!(
                %overdraft_limit,
                default = %default.overdraft_limit,
                "invalid overdraft limit, using default"
            );
            default.overdraft_limit
        } else {
            overdraft_limit
        };

        let interest_rate = if interest_rate < Decimal::ZERO {
            warn!(
                %interest_rate,
                default = %default.interest_rate,
                "invalid interest rate, using default"
            );
            default.interest_rate
        } else {
            interest_rate
        };

        Self {
            overdraft_limit,
            interest_rate,
        }
    }
}

/// A read-only view of an account's history, for display
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView<'a> {
    pub account_number: &'a str,
    pub account_type: &'a AccountType,
    pub entries: Vec<&'a HistoryEntry>,
}

/// The in-memory collection of all accounts
pub struct Ledger {
    accounts: HashMap<AccountNumber, Account>,
    config: LedgerConfig,
}

impl Ledger {
    /// Create an empty ledger with the default configuration
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create an empty ledger with an explicit configuration
    pub fn with_config(config: LedgerConfig) -> Self {
        Ledger {
            accounts: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, account_number: &str) -> bool {
        self.accounts.contains_key(account_number)
    }

    /// Look up an account without authentication
    pub fn account(&self, account_number: &str) -> Option<&Account> {
        self.accounts.get(account_number)
    }

    /// All accounts sorted by account number
    ///
    /// Provides deterministic ordering for summaries.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.number().cmp(b.number()));
        accounts
    }

    /// Open a new account with zero balance
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the number is already in use; the
    /// existing account is left untouched.
    pub fn create_account(
        &mut self,
        account_number: &str,
        holder_name: &str,
        account_type: AccountType,
    ) -> Result<&Account, LedgerError> {
        if self.accounts.contains_key(account_number) {
            warn!(account = account_number, "duplicate account number");
            return Err(LedgerError::duplicate_account(account_number));
        }

        let account = Account::new(
            account_number,
            holder_name,
            account_type,
            self.config.overdraft_limit,
        );
        info!(
            account = account_number,
            account_type = %account.account_type(),
            "account created"
        );

        Ok(&*self
            .accounts
            .entry(account_number.to_string())
            .or_insert(account))
    }

    /// Check that the account exists and its holder name equals `supplied_name`
    ///
    /// This is a convenience gate, not a security mechanism: there is no
    /// password and the comparison is a plain string match.
    pub fn authenticate(&self, account_number: &str, supplied_name: &str) -> bool {
        self.accounts
            .get(account_number)
            .is_some_and(|account| account.holder_matches(supplied_name))
    }

    /// Deposit into an account after the holder check
    ///
    /// # Returns
    ///
    /// The new balance.
    pub fn deposit(
        &mut self,
        account_number: &str,
        holder_name: &str,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let account = self.authorized_mut(account_number, holder_name)?;

        let result = account.deposit(amount);
        log_outcome("deposit", account_number, amount, &result);
        result
    }

    /// Withdraw from an account after the holder check
    ///
    /// # Returns
    ///
    /// The new balance.
    pub fn withdraw(
        &mut self,
        account_number: &str,
        holder_name: &str,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let account = self.authorized_mut(account_number, holder_name)?;

        let result = account.withdraw(amount);
        log_outcome("withdrawal", account_number, amount, &result);
        result
    }

    /// Transfer between two accounts, authenticating against the source holder
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if either account is missing (source checked first)
    /// - `AuthenticationFailed` if the name does not match the source holder
    /// - any error from [`Account::transfer`]
    ///
    /// A transfer from an account to itself goes through
    /// [`Account::transfer_to_self`]: the balance is unchanged and both
    /// history entries are recorded.
    pub fn transfer_funds(
        &mut self,
        source_number: &str,
        target_number: &str,
        holder_name: &str,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        self.ensure_exists(source_number)?;
        self.ensure_exists(target_number)?;
        self.ensure_authenticated(source_number, holder_name)?;

        let result = if source_number == target_number {
            match self.accounts.get_mut(source_number) {
                Some(account) => account.transfer_to_self(amount),
                None => Err(LedgerError::account_not_found(source_number)),
            }
        } else {
            // Take the source out so both accounts can be borrowed mutably
            let mut source = self
                .accounts
                .remove(source_number)
                .ok_or_else(|| LedgerError::account_not_found(source_number))?;

            let result = match self.accounts.get_mut(target_number) {
                Some(target) => source.transfer(target, amount),
                None => Err(LedgerError::account_not_found(target_number)),
            };

            self.accounts.insert(source_number.to_string(), source);
            result
        };

        match &result {
            Ok(()) => debug!(
                source = source_number,
                target = target_number,
                %amount,
                "transfer applied"
            ),
            Err(e) => warn!(
                source = source_number,
                target = target_number,
                %amount,
                error = %e,
                "transfer rejected"
            ),
        }

        result
    }

    /// Current balance after the holder check
    pub fn balance(&self, account_number: &str, holder_name: &str) -> Result<Decimal, LedgerError> {
        Ok(self.authorized(account_number, holder_name)?.balance())
    }

    /// Full history after the holder check
    pub fn transaction_history(
        &self,
        account_number: &str,
        holder_name: &str,
    ) -> Result<HistoryView<'_>, LedgerError> {
        let account = self.authorized(account_number, holder_name)?;

        Ok(HistoryView {
            account_number: account.number(),
            account_type: account.account_type(),
            entries: account.transaction_history().iter().collect(),
        })
    }

    /// History entries containing `keyword` (case-insensitive) after the holder check
    pub fn filtered_transaction_history(
        &self,
        account_number: &str,
        holder_name: &str,
        keyword: &str,
    ) -> Result<HistoryView<'_>, LedgerError> {
        let account = self.authorized(account_number, holder_name)?;

        Ok(HistoryView {
            account_number: account.number(),
            account_type: account.account_type(),
            entries: account.filtered_transaction_history(keyword),
        })
    }

    pub fn deactivate_account(
        &mut self,
        account_number: &str,
        holder_name: &str,
    ) -> Result<(), LedgerError> {
        self.authorized_mut(account_number, holder_name)?.deactivate();
        info!(account = account_number, "account deactivated");
        Ok(())
    }

    pub fn reactivate_account(
        &mut self,
        account_number: &str,
        holder_name: &str,
    ) -> Result<(), LedgerError> {
        self.authorized_mut(account_number, holder_name)?.reactivate();
        info!(account = account_number, "account reactivated");
        Ok(())
    }

    /// Apply one interest cycle to every account
    ///
    /// Runs without authentication. Checking accounts are skipped; an
    /// account whose interest would overflow is left unchanged and logged.
    ///
    /// # Returns
    ///
    /// The number of accounts credited.
    pub fn calculate_interest_for_all(&mut self) -> usize {
        let rate = self.config.interest_rate;
        let mut credited = 0;

        for account in self.accounts.values_mut() {
            match account.calculate_interest(rate) {
                Ok(Some(interest)) => {
                    credited += 1;
                    debug!(account = account.number(), %interest, "interest credited");
                }
                Ok(None) => {}
                Err(e) => warn!(account = account.number(), error = %e, "interest skipped"),
            }
        }

        info!(credited, %rate, "interest sweep complete");
        credited
    }

    fn ensure_exists(&self, account_number: &str) -> Result<(), LedgerError> {
        if !self.accounts.contains_key(account_number) {
            warn!(account = account_number, "account not found");
            return Err(LedgerError::account_not_found(account_number));
        }
        Ok(())
    }

    fn ensure_authenticated(&self, account_number: &str, holder_name: &str) -> Result<(), LedgerError> {
        if !self.authenticate(account_number, holder_name) {
            warn!(account = account_number, "authentication failed");
            return Err(LedgerError::authentication_failed(account_number));
        }
        Ok(())
    }

    fn authorized(&self, account_number: &str, holder_name: &str) -> Result<&Account, LedgerError> {
        self.ensure_exists(account_number)?;
        self.ensure_authenticated(account_number, holder_name)?;
        self.accounts
            .get(account_number)
            .ok_or_else(|| LedgerError::account_not_found(account_number))
    }

    fn authorized_mut(
        &mut self,
        account_number: &str,
        holder_name: &str,
    ) -> Result<&mut Account, LedgerError> {
        self.ensure_exists(account_number)?;
        self.ensure_authenticated(account_number, holder_name)?;
        self.accounts
            .get_mut(account_number)
            .ok_or_else(|| LedgerError::account_not_found(account_number))
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn log_outcome(
    operation: &str,
    account_number: &str,
    amount: Decimal,
    result: &Result<Decimal, LedgerError>,
) {
    match result {
        Ok(balance) => debug!(account = account_number, %amount, %balance, "{} applied", operation),
        Err(e) => warn!(account = account_number, %amount, error = %e, "{} rejected", operation),
    }
}
