//! I/O module
//!
//! Handles session input and summary output.
//!
//! # Components
//!
//! - `csv_format` - CSV account summary serialization
//! - `input` - Session input from stdin or a replay file

pub mod csv_format;
pub mod input;

pub use csv_format::{write_accounts_csv, SummaryRecord};
pub use input::open_input;
