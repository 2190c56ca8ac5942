//! Deploy Result
//!
//! Result types for deploy operations.

use crate::domain::value_objects::{AppName, Step};

/// What happened to a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Ran and exited with `code`
    Ran { code: i32 },
    /// Not needed on this run
    Skipped { reason: String },
    /// Dry run: would have run this command
    Planned { command: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step: Step,
    pub outcome: StepOutcome,
}

/// A labelled URL or command shown after the deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

impl ReportLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Result of a deploy run that did not halt
#[derive(Debug, Clone)]
pub struct DeployReport {
    pub app: AppName,
    /// The app did not exist and was created on this run
    pub created: bool,
    /// Answer of the app-status query; `None` when it could not be asked
    pub app_exists: Option<bool>,
    pub dry_run: bool,
    /// Steps in the order they were reached
    pub steps: Vec<StepRecord>,
    pub app_url: String,
    pub endpoints: Vec<ReportLine>,
    /// Provider commands for inspecting the running app
    pub debug_commands: Vec<ReportLine>,
}

impl DeployReport {
    pub fn new(app: AppName, dry_run: bool) -> Self {
        Self {
            app,
            created: false,
            app_exists: None,
            dry_run,
            steps: Vec::new(),
            app_url: String::new(),
            endpoints: Vec::new(),
            debug_commands: Vec::new(),
        }
    }

    /// Steps that actually executed a command, in order
    pub fn executed(&self) -> Vec<Step> {
        self.steps
            .iter()
            .filter(|r| matches!(r.outcome, StepOutcome::Ran { .. }))
            .map(|r| r.step)
            .collect()
    }

    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|r| r.step == step)
            .map(|r| &r.outcome)
    }
}
