//! Menu choices offered by the interactive shell

use std::str::FromStr;

/// One entry of the main menu, numbered 1 through 11
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    TransferFunds,
    CheckBalance,
    TransactionHistory,
    FilteredTransactionHistory,
    CalculateInterest,
    DeactivateAccount,
    ReactivateAccount,
    Exit,
}

impl MenuChoice {
    /// Every choice in menu order
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::CreateAccount,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::TransferFunds,
        MenuChoice::CheckBalance,
        MenuChoice::TransactionHistory,
        MenuChoice::FilteredTransactionHistory,
        MenuChoice::CalculateInterest,
        MenuChoice::DeactivateAccount,
        MenuChoice::ReactivateAccount,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u32 {
        match self {
            MenuChoice::CreateAccount => 1,
            MenuChoice::Deposit => 2,
            MenuChoice::Withdraw => 3,
            MenuChoice::TransferFunds => 4,
            MenuChoice::CheckBalance => 5,
            MenuChoice::TransactionHistory => 6,
            MenuChoice::FilteredTransactionHistory => 7,
            MenuChoice::CalculateInterest => 8,
            MenuChoice::DeactivateAccount => 9,
            MenuChoice::ReactivateAccount => 10,
            MenuChoice::Exit => 11,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CreateAccount => "Create Account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::TransferFunds => "Transfer Funds",
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::TransactionHistory => "Print Transaction History",
            MenuChoice::FilteredTransactionHistory => "Print Filtered Transaction History",
            MenuChoice::CalculateInterest => "Calculate Interest",
            MenuChoice::DeactivateAccount => "Deactivate Account",
            MenuChoice::ReactivateAccount => "Reactivate Account",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<u32> for MenuChoice {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == value)
            .ok_or(value)
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(|n| MenuChoice::try_from(n).ok())
            .ok_or_else(|| s.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first("1", MenuChoice::CreateAccount)]
    #[case::padded(" 4 ", MenuChoice::TransferFunds)]
    #[case::filtered("7", MenuChoice::FilteredTransactionHistory)]
    #[case::last("11", MenuChoice::Exit)]
    fn test_parse_valid_choice(#[case] input: &str, #[case] expected: MenuChoice) {
        assert_eq!(input.parse::<MenuChoice>().unwrap(), expected);
    }

    #[rstest]
    #[case::zero("0")]
    #[case::too_large("12")]
    #[case::negative("-1")]
    #[case::text("deposit")]
    #[case::empty("")]
    fn test_parse_invalid_choice(#[case] input: &str) {
        assert!(input.parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_numbers_are_sequential() {
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.number() as usize, index + 1);
            assert_eq!(MenuChoice::try_from(choice.number()), Ok(*choice));
        }
    }
}
