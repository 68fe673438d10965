//! Interactive shell driving the ledger
//!
//! The shell prints the menu, reads one choice per loop, prompts for the
//! parameters that choice needs, calls exactly one ledger operation, and
//! renders its outcome. Decision logic stays in [`Ledger`]; this module only
//! turns results and errors into console text.
//!
//! # Input Handling
//!
//! - Menu choices and amounts are trimmed before parsing
//! - Names, account numbers, account types, and keywords are taken as typed
//! - End of input ends the session as if Exit had been chosen
//!
//! # Error Handling
//!
//! Ledger refusals and malformed input are written to the output and the
//! loop continues. Only I/O errors on the session streams are returned.

mod menu;

pub use menu::MenuChoice;

use crate::core::{HistoryView, Ledger};
use crate::types::{display_amount, AccountType, LedgerError};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Errors raised while running a shell session
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended
    #[error("End of input")]
    EndOfInput,

    /// Menu choice was not a number between 1 and 11
    #[error("Invalid choice. Please try again.")]
    InvalidChoice {
        /// The rejected input
        input: String,
    },

    /// Amount could not be parsed as a decimal number
    #[error("Invalid amount '{input}': expected a decimal number")]
    InvalidAmount {
        /// The rejected input
        input: String,
    },

    /// The ledger refused the operation
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl ShellError {
    /// Whether the session must stop instead of reporting and continuing
    fn is_fatal(&self) -> bool {
        matches!(self, ShellError::Io(_))
    }
}

/// Interactive session over a ledger
///
/// Generic over its reader and writer so sessions can run against stdin and
/// stdout or against in-memory buffers.
pub struct Shell<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(ledger: Ledger, input: R, output: W) -> Self {
        Shell {
            ledger,
            input,
            output,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Give back the ledger and output once the session is over
    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.output)
    }

    /// Run the menu loop until Exit or end of input
    ///
    /// # Errors
    ///
    /// Returns an error only when the input or output stream fails.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            self.print_menu()?;

            let outcome = self
                .prompt("Choose an option: ")
                .and_then(|line| parse_choice(&line))
                .and_then(|choice| self.execute(choice));

            match outcome {
                Ok(true) => continue,
                Ok(false) | Err(ShellError::EndOfInput) => {
                    writeln!(self.output, "Exiting Banking System.")?;
                    self.output.flush()?;
                    return Ok(());
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Run one menu choice; `Ok(false)` means the session should end
    fn execute(&mut self, choice: MenuChoice) -> Result<bool, ShellError> {
        debug!(choice = choice.number(), "menu choice");

        match choice {
            MenuChoice::CreateAccount => self.create_account()?,
            MenuChoice::Deposit => self.deposit()?,
            MenuChoice::Withdraw => self.withdraw()?,
            MenuChoice::TransferFunds => self.transfer_funds()?,
            MenuChoice::CheckBalance => self.print_balance()?,
            MenuChoice::TransactionHistory => self.print_transaction_history()?,
            MenuChoice::FilteredTransactionHistory => self.print_filtered_transaction_history()?,
            MenuChoice::CalculateInterest => self.calculate_interest()?,
            MenuChoice::DeactivateAccount => self.deactivate_account()?,
            MenuChoice::ReactivateAccount => self.reactivate_account()?,
            MenuChoice::Exit => return Ok(false),
        }

        Ok(true)
    }

    fn create_account(&mut self) -> Result<(), ShellError> {
        let number = self.prompt("Enter account number: ")?;
        let holder = self.prompt("Enter account holder name: ")?;
        let account_type = self.prompt("Enter account type (Savings/Checking): ")?;

        self.ledger
            .create_account(&number, &holder, AccountType::from(account_type.as_str()))?;
        writeln!(self.output, "Account created successfully.")?;
        Ok(())
    }

    fn deposit(&mut self) -> Result<(), ShellError> {
        let number = self.prompt("Enter account number: ")?;
        let holder = self.prompt_holder(&number)?;
        let amount = self.prompt_amount("Enter deposit amount: ")?;

        self.ledger.deposit(&number, &holder, amount)?;
        writeln!(self.output, "Successfully deposited: {}", display_amount(amount))?;
        Ok(())
    }

    fn withdraw(&mut self) -> Result<(), ShellError> {
        let number = self.prompt("Enter account number: ")?;
        let holder = self.prompt_holder(&number)?;
        let amount = self.prompt_amount("Enter withdrawal amount: ")?;

        self.ledger.withdraw(&number, &holder, amount)?;
        writeln!(self.output, "Successfully withdrawn: {}", display_amount(amount))?;
        Ok(())
    }

    fn transfer_funds(&mut self) -> Result<(), ShellError> {
        let source = self.prompt("Enter source account number: ")?;
        let target = self.prompt("Enter target account number: ")?;

        for number in [&source, &target] {
            if !self.ledger.contains(number) {
                return Err(LedgerError::account_not_found(number).into());
            }
        }
        let holder = self.prompt_holder(&source)?;
        let amount = self.prompt_amount("Enter transfer amount: ")?;

        self.ledger
            .transfer_funds(&source, &target, &holder, amount)?;
        writeln!(
            self.output,
            "Successfully transferred: {} to {}",
            display_amount(amount),
            target
        )?;
        Ok(())
    }

    fn print_balance(&mut self) -> Result<(), ShellError> {
        let number = self.prompt("Enter account number: ")?;
        let holder = self.prompt_holder(&number)?;

        let balance = self.ledger.balance(&number, &holder)?;
        writeln!(self.output, "Current balance: {}", display_amount(balance))?;
        Ok(())
    }

    fn print_transaction_history(&mut self) -> Result<(), ShellError> {
        let number = self.prompt("Enter account number: ")?;
        let holder = self.prompt_holder(&number)?;

        let view = self.ledger.transaction_history(&number, &holder)?;
        write_history(&mut self.output, "Transaction History", &view)?;
        Ok(())
    }

    fn print_filtered_transaction_history(&mut self) -> Result<(), ShellError> {
        let number = self.prompt("Enter account number: ")?;
        let holder = self.prompt_holder(&number)?;
        let keyword =
            self.prompt("Enter filter keyword (e.g., 'Deposit', 'Withdraw', 'Transfer'): ")?;

        let view = self
            .ledger
            .filtered_transaction_history(&number, &holder, &keyword)?;
        write_history(&mut self.output, "Filtered Transaction History", &view)?;
        Ok(())
    }

    fn calculate_interest(&mut self) -> Result<(), ShellError> {
        self.ledger.calculate_interest_for_all();
        writeln!(
            self.output,
            "Interest calculated and credited to all savings accounts."
        )?;
        Ok(())
    }

    fn deactivate_account(&mut self) -> Result<(), ShellError> {
        let number = self.prompt("Enter account number: ")?;
        let holder = self.prompt_holder(&number)?;

        self.ledger.deactivate_account(&number, &holder)?;
        writeln!(self.output, "Account deactivated successfully.")?;
        Ok(())
    }

    fn reactivate_account(&mut self) -> Result<(), ShellError> {
        let number = self.prompt("Enter account number: ")?;
        let holder = self.prompt_holder(&number)?;

        self.ledger.reactivate_account(&number, &holder)?;
        writeln!(self.output, "Account reactivated successfully.")?;
        Ok(())
    }

    /// Ask for the holder name of an existing account and check it
    ///
    /// A missing account short-circuits before the name is asked for.
    fn prompt_holder(&mut self, number: &str) -> Result<String, ShellError> {
        if !self.ledger.contains(number) {
            return Err(LedgerError::account_not_found(number).into());
        }

        let holder = self.prompt("Enter account holder name: ")?;
        if !self.ledger.authenticate(number, &holder) {
            return Err(LedgerError::authentication_failed(number).into());
        }

        Ok(holder)
    }

    fn prompt_amount(&mut self, text: &str) -> Result<Decimal, ShellError> {
        let line = self.prompt(text)?;
        Decimal::from_str(line.trim()).map_err(|_| ShellError::InvalidAmount {
            input: line.trim().to_string(),
        })
    }

    fn prompt(&mut self, text: &str) -> Result<String, ShellError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String, ShellError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::EndOfInput);
        }

        let trimmed_len = line.trim_end_matches(|c| c == '\r' || c == '\n').len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn print_menu(&mut self) -> Result<(), ShellError> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Banking System Menu ---")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }
}

fn parse_choice(line: &str) -> Result<MenuChoice, ShellError> {
    line.parse::<MenuChoice>()
        .map_err(|input| ShellError::InvalidChoice { input })
}

fn write_history(output: &mut impl Write, title: &str, view: &HistoryView<'_>) -> std::io::Result<()> {
    writeln!(
        output,
        "{} for account {} ({}):",
        title, view.account_number, view.account_type
    )?;
    for entry in &view.entries {
        writeln!(output, "{}", entry)?;
    }
    Ok(())
}
