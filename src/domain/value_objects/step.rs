//! Step Value Object
//!
//! The stages of a deploy run, in the order they can occur.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Provider CLI is resolvable on PATH
    Preflight,
    /// `whoami` against the provider
    AuthCheck,
    /// Interactive login, only after a failed auth check
    Login,
    /// Does the app already exist?
    AppStatus,
    /// Create the app
    Create,
    /// Read the secret from the operator
    SecretPrompt,
    /// Register the secret with the provider
    SecretSet,
    /// Build and release
    Deploy,
    /// Status after the deploy
    FinalStatus,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Preflight => "preflight",
            Step::AuthCheck => "auth check",
            Step::Login => "login",
            Step::AppStatus => "app status",
            Step::Create => "create app",
            Step::SecretPrompt => "secret prompt",
            Step::SecretSet => "set secret",
            Step::Deploy => "deploy",
            Step::FinalStatus => "status",
        }
    }

    /// Short human-readable description for progress lines.
    pub fn title(&self) -> &'static str {
        match self {
            Step::Preflight => "Checking provider CLI",
            Step::AuthCheck => "Checking authentication",
            Step::Login => "Logging in",
            Step::AppStatus => "Looking up app",
            Step::Create => "Creating app",
            Step::SecretPrompt => "Reading secret",
            Step::SecretSet => "Registering secret",
            Step::Deploy => "Deploying",
            Step::FinalStatus => "Fetching status",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
