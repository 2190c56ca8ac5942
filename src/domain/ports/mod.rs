//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod deploy_events;
pub mod provider;
pub mod secret_prompt;

pub use command_runner::{CapturedOutput, CommandRunner, CommandStatus, Invocation, RunError};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use provider::Provider;
pub use secret_prompt::SecretPrompt;
