//! Bank Ledger CLI
//!
//! Interactive console simulation of a bank ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --overdraft-limit 1000 --interest-rate 0.03
//! cargo run -- --input session.txt --summary > transcript.txt
//! ```
//!
//! The program prints a numbered menu, reads one choice per line, prompts for
//! the details of that choice, and reports the outcome. Option 11 (or end of
//! input) ends the session; all state is discarded.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input file not readable, terminal I/O failure, etc.)

use bank_ledger::cli;
use bank_ledger::io::{open_input, write_accounts_csv};
use bank_ledger::logging;
use bank_ledger::{Ledger, Shell};
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init(&args.log_level);

    let input = match open_input(args.input_file.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let ledger = Ledger::with_config(args.to_ledger_config());
    let mut shell = Shell::new(ledger, input, std::io::stdout());

    if let Err(e) = shell.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if args.summary {
        let (ledger, mut output) = shell.into_parts();
        if let Err(e) = write_accounts_csv(&ledger.accounts(), &mut output) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
