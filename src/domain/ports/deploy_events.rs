//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

use crate::domain::value_objects::Step;

/// Event emitted during a deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Run started
    Started {
        app: String,
        region: String,
        program: String,
    },

    /// A step began; `command` is the rendered invocation, if the step runs one
    StepStarted { step: Step, command: Option<String> },

    /// A step ran to completion (successfully or not)
    StepFinished { step: Step, code: i32 },

    /// A step was not needed
    StepSkipped { step: Step, reason: String },

    /// Dry run: the command that would have been executed
    Planned { step: Step, command: String },

    /// Run completed without failure
    Completed { created: bool, app_url: String },

    /// Run halted at `step`
    Failed { step: Step, code: i32 },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - Console sink in the binary: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}

impl<T: DeployEventSink + ?Sized> DeployEventSink for std::sync::Arc<T> {
    fn on_event(&self, event: DeployEvent) {
        (**self).on_event(event)
    }
}
