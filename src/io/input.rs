//! Session input sources
//!
//! The shell reads its session either from stdin or, for replaying a
//! scripted session, from a file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open the session input
///
/// # Arguments
///
/// * `path` - File to replay, or `None` for stdin
///
/// # Returns
///
/// * `Ok(reader)` if the source opened successfully
/// * `Err(String)` if the file could not be opened
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, String> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}
