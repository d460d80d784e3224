//! CLI module for the showcase binary
//!
//! The binary takes no arguments of its own; clap provides `--help` and `--version`.
//!
//! ## Design
//!
//! `execute` returns `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::io;
use std::process;

use clap::Parser;

use crate::driver::{self, DemoError};
use crate::version::SHOWCASE_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<DemoError> for CliError {
    fn from(err: DemoError) -> Self {
        // Debug formatting of a miette report renders the full diagnostic (code, help)
        CliError::failure(format!("{:?}", miette::Report::new(err)))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// A console tour of sequence extensions, validated records, lazy options and byte views
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(version = SHOWCASE_VERSION)]
#[command(about = "A console tour of sequence extensions, validated records, lazy options and byte views", long_about = None)]
pub struct Cli {}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the demo against stdout and return the exit code.
fn execute(_cli: Cli) -> CliResult<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver::run_demo(&mut out).map_err(|e| {
        tracing::error!(error = %e, "demo failed");
        CliError::from(e)
    })?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use showcase_core::CoreError;

    #[test]
    fn test_cli_parse_no_args() {
        assert!(Cli::try_parse_from(["showcase"]).is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_args() {
        assert!(Cli::try_parse_from(["showcase", "extra"]).is_err());
        assert!(Cli::try_parse_from(["showcase", "--name", "Bob"]).is_err());
    }

    #[test]
    fn test_cli_version_flag() {
        let err = Cli::try_parse_from(["showcase", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_demo_error_maps_to_failure() {
        let err = CliError::from(DemoError::Core(CoreError::empty_name()));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Name cannot be empty"), "{}", err.message);
    }
}
