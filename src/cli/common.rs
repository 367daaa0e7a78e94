//! Shared error handling for CLI commands.

use std::fmt;

/// Result alias for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Typed CLI error, mapped to a process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Invalid input or arguments (exit code 2)
    Validation(String),
    /// I/O or runtime failure (exit code 1)
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// The process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Io(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::Io(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}
