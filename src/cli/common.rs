//! Shared CLI error and exit-code handling.
//!
//! Command handlers return [`CliResult`] so `main` can map every failure to a
//! stable process exit code for scripting and CI use.

use std::fmt;

/// Result alias used by all CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes of the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success,
    /// Input failed validation.
    ValidationFailed,
    /// Command line was malformed or incomplete.
    UsageError,
    /// A file could not be read, parsed, or written.
    IoError,
}

impl ExitCode {
    /// Returns the numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::ValidationFailed => 1,
            ExitCode::UsageError => 2,
            ExitCode::IoError => 74,
        }
    }
}

/// Error raised by a CLI command handler.
#[derive(Debug)]
pub enum CliError {
    /// File system or parse failure.
    Io(String),
    /// Input failed validation.
    Validation(String),
    /// Malformed or incomplete invocation.
    Usage(String),
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        CliError::Io(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::Validation(message.into())
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }

    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Io(_) => ExitCode::IoError,
            CliError::Validation(_) => ExitCode::ValidationFailed,
            CliError::Usage(_) => ExitCode::UsageError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(msg) | CliError::Validation(msg) | CliError::Usage(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").exit_code().code(), 1);
        assert_eq!(CliError::usage("x").exit_code().code(), 2);
        assert_eq!(CliError::io("x").exit_code().code(), 74);
    }

    #[test]
    fn test_display_passes_message_through() {
        assert_eq!(CliError::io("cannot read").to_string(), "cannot read");
    }
}
