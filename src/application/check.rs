//! Check Use Case
//!
//! Read-only health check of the local deploy setup: is the provider CLI
//! installed, is the operator logged in, does the app exist yet. Never logs in
//! and never creates anything.

use crate::domain::ports::{CommandRunner, Provider};
use crate::domain::value_objects::AppName;
use crate::error::DeckhandResult;

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    /// Name of the check
    pub name: String,
    /// Status of the check
    pub status: CheckStatus,
    /// Human-readable message
    pub message: String,
    /// Recommendation for fixing issues
    pub recommendation: Option<String>,
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    /// All check items
    pub items: Vec<CheckItem>,
    /// Number of passed checks
    pub passed: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of errors
    pub errors: usize,
}

impl CheckResult {
    /// Check if all checks passed (no errors)
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// Check if all checks passed with no warnings
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }

    fn push(&mut self, item: CheckItem) {
        match item.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Error => self.errors += 1,
        }
        self.items.push(item);
    }
}

/// Check Use Case
pub struct CheckUseCase<'a, R: CommandRunner> {
    runner: R,
    provider: &'a dyn Provider,
}

impl<'a, R: CommandRunner> CheckUseCase<'a, R> {
    /// Create a new CheckUseCase
    pub fn new(runner: R, provider: &'a dyn Provider) -> Self {
        Self { runner, provider }
    }

    /// Execute the check operation
    pub fn execute(&self, app: &AppName) -> DeckhandResult<CheckResult> {
        self.execute_with_callback(app, |_| {})
    }

    /// Execute with a callback for each check (for streaming UI)
    pub fn execute_with_callback<F>(&self, app: &AppName, mut on_item: F) -> DeckhandResult<CheckResult>
    where
        F: FnMut(&CheckItem),
    {
        let mut result = CheckResult::default();
        let mut record = |item: CheckItem, result: &mut CheckResult| {
            on_item(&item);
            result.push(item);
        };

        let program = self.provider.program();
        let Some(path) = self.runner.locate(program) else {
            record(
                CheckItem {
                    name: "Provider CLI".to_string(),
                    status: CheckStatus::Error,
                    message: format!("'{}' not found on PATH", program),
                    recommendation: Some(self.provider.install_hint().to_string()),
                },
                &mut result,
            );
            return Ok(result);
        };
        record(
            CheckItem {
                name: "Provider CLI".to_string(),
                status: CheckStatus::Pass,
                message: path.display().to_string(),
                recommendation: None,
            },
            &mut result,
        );

        let whoami = self.runner.capture(&self.provider.whoami())?;
        let auth = if whoami.status.success() {
            let user = first_line(&whoami.stdout);
            CheckItem {
                name: "Authentication".to_string(),
                status: CheckStatus::Pass,
                message: if user.is_empty() {
                    "logged in".to_string()
                } else {
                    format!("logged in as {}", user)
                },
                recommendation: None,
            }
        } else {
            CheckItem {
                name: "Authentication".to_string(),
                status: CheckStatus::Error,
                message: "not logged in".to_string(),
                recommendation: Some(format!("Run: {}", self.provider.login())),
            }
        };
        let logged_in = auth.status == CheckStatus::Pass;
        record(auth, &mut result);

        if !logged_in {
            return Ok(result);
        }

        let probe = self.runner.capture(&self.provider.app_status(app))?;
        let item = if probe.status.success() {
            CheckItem {
                name: "App".to_string(),
                status: CheckStatus::Pass,
                message: format!("'{}' exists ({})", app, self.provider.app_url(app)),
                recommendation: None,
            }
        } else {
            CheckItem {
                name: "App".to_string(),
                status: CheckStatus::Warning,
                message: format!("'{}' does not exist yet", app),
                recommendation: Some("It will be created on the next deploy.".to_string()),
            }
        };
        record(item, &mut result);

        Ok(result)
    }
}

fn first_line(text: &str) -> &str {
    text.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{CapturedOutput, CommandStatus, Invocation, RunError};
    use crate::infrastructure::FlyProvider;
    use std::path::PathBuf;

    struct FakeRunner {
        installed: bool,
        whoami: i32,
        app_status: i32,
    }

    impl CommandRunner for FakeRunner {
        fn locate(&self, program: &str) -> Option<PathBuf> {
            self.installed.then(|| PathBuf::from("/bin").join(program))
        }

        fn run(&self, invocation: &Invocation) -> Result<CommandStatus, RunError> {
            self.capture(invocation).map(|out| out.status)
        }

        fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput, RunError> {
            let (code, stdout) = if invocation.has_arg("whoami") {
                (self.whoami, "ops@example.com\n")
            } else {
                (self.app_status, "")
            };
            Ok(CapturedOutput {
                status: CommandStatus::from_code(code),
                stdout: stdout.to_string(),
                stderr: String::new(),
            })
        }
    }

    fn app() -> AppName {
        AppName::new("ghl-mcp-server").unwrap()
    }

    #[test]
    fn all_checks_pass() {
        let provider = FlyProvider::default();
        let runner = FakeRunner {
            installed: true,
            whoami: 0,
            app_status: 0,
        };

        let result = CheckUseCase::new(runner, &provider).execute(&app()).unwrap();

        assert!(result.is_clean());
        assert_eq!(result.passed, 3);
        assert_eq!(result.items[1].message, "logged in as ops@example.com");
    }

    #[test]
    fn missing_cli_stops_early() {
        let provider = FlyProvider::default();
        let runner = FakeRunner {
            installed: false,
            whoami: 0,
            app_status: 0,
        };

        let result = CheckUseCase::new(runner, &provider).execute(&app()).unwrap();

        assert!(!result.is_success());
        assert_eq!(result.items.len(), 1);
        assert!(result.items[0].recommendation.is_some());
    }

    #[test]
    fn logged_out_is_an_error_with_login_hint() {
        let provider = FlyProvider::default();
        let runner = FakeRunner {
            installed: true,
            whoami: 1,
            app_status: 0,
        };

        let result = CheckUseCase::new(runner, &provider).execute(&app()).unwrap();

        assert_eq!(result.errors, 1);
        assert_eq!(
            result.items[1].recommendation.as_deref(),
            Some("Run: flyctl auth login")
        );
    }

    #[test]
    fn missing_app_is_only_a_warning() {
        let provider = FlyProvider::default();
        let runner = FakeRunner {
            installed: true,
            whoami: 0,
            app_status: 1,
        };

        let mut seen = Vec::new();
        let result = CheckUseCase::new(runner, &provider)
            .execute_with_callback(&app(), |item| seen.push(item.name.clone()))
            .unwrap();

        assert!(result.is_success());
        assert_eq!(result.warnings, 1);
        assert_eq!(seen, vec!["Provider CLI", "Authentication", "App"]);
    }
}
