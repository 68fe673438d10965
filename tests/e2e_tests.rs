//! End-to-end integration tests
//!
//! These tests drive complete shell sessions. Each test:
//! 1. Builds a scripted session (one input per line)
//! 2. Runs it through the shell against a fresh ledger
//! 3. Checks the transcript and the final ledger state
//!
//! Scenarios cover:
//! - Happy path deposits, withdrawals, and transfers
//! - Overdraft boundaries and interest on overdrawn savings
//! - Deactivation and reactivation
//! - Authentication and lookup failures
//! - Replaying a session from a file

#[cfg(test)]
mod tests {
    use bank_ledger::io::{open_input, write_accounts_csv};
    use bank_ledger::{Ledger, LedgerConfig, Shell};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    /// Run a scripted session and return the final ledger and transcript
    ///
    /// `script` holds one input per line.
    fn run_session(script: &str) -> (Ledger, String) {
        run_session_with(Ledger::new(), script)
    }

    fn run_session_with(ledger: Ledger, script: &str) -> (Ledger, String) {
        let mut shell = Shell::new(ledger, Cursor::new(script.to_string()), Vec::new());
        shell
            .run()
            .unwrap_or_else(|e| panic!("Session failed: {}", e));

        let (ledger, output) = shell.into_parts();
        (ledger, String::from_utf8(output).expect("Transcript is not UTF-8"))
    }

    fn balance_of(ledger: &Ledger, number: &str) -> Decimal {
        ledger
            .account(number)
            .unwrap_or_else(|| panic!("Account {} missing", number))
            .balance()
    }

    fn history_of(ledger: &Ledger, number: &str) -> Vec<String> {
        ledger
            .account(number)
            .unwrap_or_else(|| panic!("Account {} missing", number))
            .transaction_history()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_overdraft_and_interest_scenario() {
        let script = "1\nA1\nAlice\nSavings\n\
                      2\nA1\nAlice\n100\n\
                      3\nA1\nAlice\n700\n\
                      3\nA1\nAlice\n600\n\
                      8\n\
                      5\nA1\nAlice\n\
                      11\n";
        let (ledger, output) = run_session(script);

        assert!(output.contains("Successfully deposited: 100.0"));
        assert!(output.contains(
            "Insufficient funds in account A1: balance 100.0, overdraft limit 500.0, requested 700.0"
        ));
        assert!(output.contains("Successfully withdrawn: 600.0"));
        assert!(output.contains("Interest calculated and credited to all savings accounts."));
        assert!(output.contains("Current balance: -510.0"));
        assert_eq!(balance_of(&ledger, "A1"), Decimal::new(-510, 0));
        assert_eq!(
            history_of(&ledger, "A1"),
            vec![
                "Deposited: 100.0",
                "Withdrawn: 600.0",
                "Interest credited: -10.0",
            ]
        );
    }

    #[rstest]
    #[case::checking("Checking")]
    #[case::lower_case_savings("savings")]
    #[case::business("Business")]
    fn test_only_exact_savings_earns_interest(#[case] account_type: &str) {
        let script = format!(
            "1\nC1\nCarol\n{}\n\
             2\nC1\nCarol\n100\n\
             8\n\
             6\nC1\nCarol\n\
             11\n",
            account_type
        );
        let (ledger, output) = run_session(&script);

        assert!(output.contains("Account created successfully."));
        assert!(output.contains(&format!(
            "Transaction History for account C1 ({}):\nDeposited: 100.0\n",
            account_type
        )));
        assert_eq!(balance_of(&ledger, "C1"), Decimal::new(100, 0));
        assert_eq!(history_of(&ledger, "C1"), vec!["Deposited: 100.0"]);
    }

    #[test]
    fn test_duplicate_account_creation() {
        let script = "1\nA1\nAlice\nSavings\n\
                      1\nA1\nMallory\nChecking\n\
                      11\n";
        let (ledger, output) = run_session(script);

        assert_eq!(output.matches("Account created successfully.").count(), 1);
        assert!(output.contains("Account number A1 already exists"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.account("A1").unwrap().holder_name(), "Alice");
    }

    #[test]
    fn test_transfer_records_both_sides() {
        let script = "1\nA1\nAlice\nSavings\n\
                      1\nB1\nBob\nChecking\n\
                      2\nA1\nAlice\n100\n\
                      4\nA1\nB1\nAlice\n40.5\n\
                      6\nB1\nBob\n\
                      11\n";
        let (ledger, output) = run_session(script);

        assert!(output.contains("Successfully transferred: 40.5 to B1"));
        assert!(output.contains("Transaction History for account B1 (Checking):\nDeposited: 40.5\n"));
        assert_eq!(balance_of(&ledger, "A1"), Decimal::new(595, 1));
        assert_eq!(balance_of(&ledger, "B1"), Decimal::new(405, 1));
        assert_eq!(
            history_of(&ledger, "A1"),
            vec!["Deposited: 100.0", "Transferred: 40.5 to B1"]
        );
    }

    #[test]
    fn test_transfer_to_same_account() {
        let script = "1\nA1\nAlice\nSavings\n\
                      2\nA1\nAlice\n100\n\
                      4\nA1\nA1\nAlice\n50\n\
                      11\n";
        let (ledger, output) = run_session(script);

        assert!(output.contains("Successfully transferred: 50.0 to A1"));
        assert_eq!(balance_of(&ledger, "A1"), Decimal::new(100, 0));
        assert_eq!(
            history_of(&ledger, "A1"),
            vec!["Deposited: 100.0", "Deposited: 50.0", "Transferred: 50.0 to A1"]
        );
    }

    #[test]
    fn test_transfer_from_deactivated_source() {
        let script = "1\nA1\nAlice\nSavings\n\
                      1\nB1\nBob\nChecking\n\
                      2\nA1\nAlice\n100\n\
                      9\nA1\nAlice\n\
                      4\nA1\nB1\nAlice\n50\n\
                      11\n";
        let (ledger, output) = run_session(script);

        assert!(output.contains("Account deactivated successfully."));
        assert!(output.contains("Account A1 is inactive"));
        assert_eq!(balance_of(&ledger, "A1"), Decimal::new(100, 0));
        assert_eq!(balance_of(&ledger, "B1"), Decimal::ZERO);
        assert!(history_of(&ledger, "B1").is_empty());
    }

    #[test]
    fn test_reactivation_restores_operations() {
        let script = "1\nA1\nAlice\nSavings\n\
                      9\nA1\nAlice\n\
                      2\nA1\nAlice\n10\n\
                      10\nA1\nAlice\n\
                      2\nA1\nAlice\n10\n\
                      11\n";
        let (ledger, output) = run_session(script);

        assert!(output.contains("Account A1 is inactive"));
        assert!(output.contains("Account reactivated successfully."));
        assert_eq!(output.matches("Successfully deposited: 10.0").count(), 1);
        assert_eq!(balance_of(&ledger, "A1"), Decimal::new(10, 0));
        assert!(ledger.account("A1").unwrap().is_active());
    }

    #[rstest]
    #[case::deposit_zero("2\nA1\nAlice\n0", "Invalid amount 0.0: amount must be positive")]
    #[case::withdraw_negative("3\nA1\nAlice\n-5", "Invalid amount -5.0: amount must be positive")]
    #[case::wrong_holder("5\nA1\nalice", "Authentication failed for account A1")]
    #[case::unknown_account("6\nZ9", "Account Z9 not found")]
    #[case::unknown_target("4\nA1\nZ9", "Account Z9 not found")]
    #[case::self_transfer_beyond_overdraft(
        "4\nA1\nA1\nAlice\n501",
        "Insufficient funds in account A1: balance 0.0, overdraft limit 500.0, requested 501.0"
    )]
    #[case::bad_amount("2\nA1\nAlice\nten", "Invalid amount 'ten': expected a decimal number")]
    #[case::bad_choice("99", "Invalid choice. Please try again.")]
    fn test_rejections_leave_state_unchanged(#[case] steps: &str, #[case] expected: &str) {
        let script = format!("1\nA1\nAlice\nSavings\n{}\n11\n", steps);

        let (ledger, output) = run_session(&script);

        assert!(
            output.contains(expected),
            "\n\nExpected message not found: {}\n\nTranscript:\n{}\n",
            expected,
            output
        );
        assert_eq!(balance_of(&ledger, "A1"), Decimal::ZERO);
        assert!(history_of(&ledger, "A1").is_empty());
    }

    #[rstest]
    #[case::deposits("deposit", &["Deposited: 100.0", "Deposited: 20.0"])]
    #[case::mixed_case("WiThDrAw", &["Withdrawn: 30.0"])]
    #[case::target_number("b1", &["Transferred: 10.0 to B1"])]
    #[case::no_match("interest", &[])]
    fn test_filtered_history(#[case] keyword: &str, #[case] expected: &[&str]) {
        let script = format!(
            "1\nA1\nAlice\nSavings\n\
             1\nB1\nBob\nChecking\n\
             2\nA1\nAlice\n100\n\
             3\nA1\nAlice\n30\n\
             2\nA1\nAlice\n20\n\
             4\nA1\nB1\nAlice\n10\n\
             7\nA1\nAlice\n{}\n\
             11\n",
            keyword
        );
        let (_, output) = run_session(&script);

        let mut block = String::from("Filtered Transaction History for account A1 (Savings):\n");
        for line in expected {
            block.push_str(line);
            block.push('\n');
        }
        block.push_str("\n--- Banking System Menu ---");

        assert!(
            output.contains(&block),
            "\n\nExpected block:\n{}\n\nTranscript:\n{}\n",
            block,
            output
        );
    }

    #[test]
    fn test_configured_ledger() {
        let config = LedgerConfig::new(Decimal::new(100, 0), Decimal::new(1, 1));
        let script = "1\nA1\nAlice\nSavings\n\
                      3\nA1\nAlice\n150\n\
                      3\nA1\nAlice\n100\n\
                      8\n\
                      11\n";
        let (ledger, output) = run_session_with(Ledger::with_config(config), script);

        assert!(output.contains("overdraft limit 100.0, requested 150.0"));
        assert_eq!(balance_of(&ledger, "A1"), Decimal::new(-110, 0));
    }

    #[test]
    fn test_replay_session_from_file_with_summary() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"1\nB2\nBob\nChecking\n1\nA1\nAlice\nSavings\n2\nA1\nAlice\n12.5\n9\nB2\nBob\n11\n")
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");

        let input = open_input(Some(file.path())).unwrap_or_else(|e| panic!("{}", e));
        let mut shell = Shell::new(Ledger::new(), input, Vec::new());
        shell.run().unwrap_or_else(|e| panic!("Session failed: {}", e));

        let mut summary = Vec::new();
        write_accounts_csv(&shell.ledger().accounts(), &mut summary)
            .unwrap_or_else(|e| panic!("Failed to write summary: {}", e));

        assert_eq!(
            String::from_utf8(summary).unwrap(),
            "account,holder,type,balance,overdraft_limit,active\n\
             A1,Alice,Savings,12.5,500.0,true\n\
             B2,Bob,Checking,0.0,500.0,false\n"
        );
    }

    #[test]
    fn test_session_without_exit_ends_cleanly() {
        let (ledger, output) = run_session("1\nA1\nAlice\nSavings\n");

        assert_eq!(ledger.len(), 1);
        assert!(output.ends_with("Choose an option: Exiting Banking System.\n"));
    }
}
