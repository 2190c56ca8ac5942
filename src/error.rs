//! Error types for Deckhand
//!
//! Library code returns `DeckhandError`; command glue wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::Step;

/// Result type alias for Deckhand operations
pub type DeckhandResult<T> = Result<T, DeckhandError>;

/// Exit code used when the provider CLI cannot be found on PATH.
pub const EXIT_CLI_NOT_FOUND: i32 = 127;

/// Main error type for Deckhand operations
#[derive(Error, Debug)]
pub enum DeckhandError {
    /// The provider CLI is not on the command search path
    #[error("'{program}' not found on PATH")]
    CliNotFound { program: String },

    /// A provider command exited unsuccessfully
    #[error("{step} failed: '{program}' exited with code {code}")]
    StepFailed {
        step: Step,
        program: String,
        code: i32,
    },

    /// A provider command could not be started
    #[error("failed to run '{program}': {message}")]
    Spawn { program: String, message: String },

    /// The operator entered nothing for the secret
    #[error("no value entered for secret '{name}'")]
    SecretEmpty { name: String },

    /// Reading interactive input failed
    #[error("could not read input: {0}")]
    Prompt(String),

    /// A configured or supplied value is malformed
    #[error("invalid {field} '{value}': {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Invalid configuration file
    #[error("invalid config in {}: {message}", .file.display())]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeckhandError {
    /// Process exit code this error should terminate with.
    ///
    /// A failed step propagates the provider's own exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            DeckhandError::CliNotFound { .. } => EXIT_CLI_NOT_FOUND,
            DeckhandError::StepFailed { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_cli_not_found() {
        let err = DeckhandError::CliNotFound {
            program: "flyctl".to_string(),
        };
        assert_eq!(err.to_string(), "'flyctl' not found on PATH");
    }

    #[test]
    fn test_error_display_step_failed() {
        let err = DeckhandError::StepFailed {
            step: Step::Deploy,
            program: "flyctl".to_string(),
            code: 3,
        };
        assert_eq!(
            err.to_string(),
            "deploy failed: 'flyctl' exited with code 3"
        );
    }

    #[test]
    fn step_failure_propagates_provider_exit_code() {
        let err = DeckhandError::StepFailed {
            step: Step::Create,
            program: "flyctl".to_string(),
            code: 42,
        };
        assert_eq!(err.exit_code(), 42);
    }

    #[test]
    fn step_failure_without_code_still_exits_non_zero() {
        let err = DeckhandError::StepFailed {
            step: Step::Create,
            program: "flyctl".to_string(),
            code: 0,
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn missing_cli_exits_127() {
        let err = DeckhandError::CliNotFound {
            program: "flyctl".to_string(),
        };
        assert_eq!(err.exit_code(), EXIT_CLI_NOT_FOUND);
    }
}
