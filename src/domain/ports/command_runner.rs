//! Command Runner Port
//!
//! Abstracts spawning the provider CLI so the deploy sequence can be driven
//! by a scripted runner in tests.

use std::fmt;
use std::path::PathBuf;

use crate::domain::value_objects::Secret;
use crate::error::DeckhandError;

/// A single external command: program, arguments and an optional stdin payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Written to the child's stdin, then stdin is closed
    pub stdin: Option<Secret>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            stdin: None,
        }
    }

    pub fn with_stdin(mut self, payload: Secret) -> Self {
        self.stdin = Some(payload);
        self
    }

    /// True if any argument equals `arg`
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }
}

/// Renders the command line. The stdin payload is never shown.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        if self.stdin.is_some() {
            f.write_str(" < (secret)")?;
        }
        Ok(())
    }
}

/// Exit status of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: i32,
}

impl CommandStatus {
    pub const SUCCESS: CommandStatus = CommandStatus { code: 0 };

    pub fn from_code(code: i32) -> Self {
        Self { code }
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Output of a command run with captured streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub status: CommandStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Errors raised before a command produced an exit status
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to start '{program}': {message}")]
    Spawn { program: String, message: String },
}

impl From<RunError> for DeckhandError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::Spawn { program, message } => DeckhandError::Spawn { program, message },
        }
    }
}

pub trait CommandRunner {
    /// Resolve `program` on the command search path
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run to completion, letting the command talk to the terminal
    fn run(&self, invocation: &Invocation) -> Result<CommandStatus, RunError>;

    /// Run to completion, capturing stdout and stderr
    fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput, RunError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        (**self).locate(program)
    }

    fn run(&self, invocation: &Invocation) -> Result<CommandStatus, RunError> {
        (**self).run(invocation)
    }

    fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput, RunError> {
        (**self).capture(invocation)
    }
}
