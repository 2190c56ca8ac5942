//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(obj) = event.as_object_mut() {
            obj.insert(
                "timestamp".to_string(),
                serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                app,
                region,
                program,
            } => serde_json::json!({
                "event": "start",
                "command": "deploy",
                "app": app,
                "region": region,
                "program": program,
            }),

            DeployEvent::StepStarted { step, command } => serde_json::json!({
                "event": "step_start",
                "command": "deploy",
                "step": step,
                "invocation": command,
            }),

            DeployEvent::StepFinished { step, code } => serde_json::json!({
                "event": "step_finished",
                "command": "deploy",
                "step": step,
                "exit_code": code,
            }),

            DeployEvent::StepSkipped { step, reason } => serde_json::json!({
                "event": "step_skipped",
                "command": "deploy",
                "step": step,
                "reason": reason,
            }),

            DeployEvent::Planned { step, command } => serde_json::json!({
                "event": "step_planned",
                "command": "deploy",
                "step": step,
                "invocation": command,
            }),

            DeployEvent::Completed { created, app_url } => serde_json::json!({
                "event": "complete",
                "command": "deploy",
                "status": "success",
                "created": created,
                "app_url": app_url,
            }),

            DeployEvent::Failed { step, code } => serde_json::json!({
                "event": "complete",
                "command": "deploy",
                "status": "failed",
                "step": step,
                "exit_code": code,
            }),
        };

        self.write_event(json);
    }
}
