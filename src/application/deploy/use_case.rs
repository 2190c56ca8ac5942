//! Deploy Use Case
//!
//! Drives the provider CLI through one deploy:
//!
//! preflight → auth check (→ login) → app status (→ create → secret) → deploy → status
//!
//! The first command that exits non-zero halts the run; its exit code becomes
//! the error. Nothing is retried or rolled back.

use std::sync::Arc;

use crate::domain::ports::{
    CommandRunner, CommandStatus, DeployEvent, DeployEventSink, Invocation, NoopEventSink,
    Provider, SecretPrompt,
};
use crate::domain::value_objects::{Secret, Step};
use crate::error::{DeckhandError, DeckhandResult, EXIT_CLI_NOT_FOUND};

use super::options::DeployOptions;
use super::result::{DeployReport, ReportLine, StepOutcome, StepRecord};

/// Deploy use case
///
/// Generic over the runner and the secret source so tests can script both.
pub struct DeployUseCase<R, S>
where
    R: CommandRunner,
    S: SecretPrompt,
{
    runner: R,
    prompt: S,
    provider: Box<dyn Provider>,
    events: Arc<dyn DeployEventSink>,
}

impl<R, S> DeployUseCase<R, S>
where
    R: CommandRunner,
    S: SecretPrompt,
{
    pub fn new(runner: R, prompt: S, provider: Box<dyn Provider>) -> Self {
        Self {
            runner,
            prompt,
            provider,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn provider(&self) -> &dyn Provider {
        self.provider.as_ref()
    }

    /// Run the whole sequence.
    pub fn execute(&self, options: &DeployOptions) -> DeckhandResult<DeployReport> {
        let mut report = DeployReport::new(options.app.clone(), options.dry_run);

        self.emit(DeployEvent::Started {
            app: options.app.to_string(),
            region: options.region.to_string(),
            program: self.provider.program().to_string(),
        });

        self.preflight(&mut report)?;
        let authenticated = self.ensure_authenticated(options, &mut report)?;

        // Before a (planned) login the provider cannot answer whether the app exists.
        let exists = if authenticated {
            Some(self.app_exists(options, &mut report)?)
        } else {
            let probe = self.provider.app_status(&options.app);
            self.plan(Step::AppStatus, &probe, &mut report);
            None
        };
        report.app_exists = exists;

        match exists {
            Some(true) => {
                let reason = format!("app '{}' already exists", options.app);
                for step in [Step::Create, Step::SecretPrompt, Step::SecretSet] {
                    self.skip(&mut report, step, &reason);
                }
            }
            Some(false) => {
                self.provision(options, &mut report)?;
                report.created = true;
            }
            None => self.provision(options, &mut report)?,
        }

        let deploy = self.provider.deploy(&options.app);
        self.require(Step::Deploy, &deploy, options.dry_run, &mut report)?;

        let status = self.provider.status(&options.app);
        self.require(Step::FinalStatus, &status, options.dry_run, &mut report)?;

        self.fill_report(options, &mut report);

        self.emit(DeployEvent::Completed {
            created: report.created,
            app_url: report.app_url.clone(),
        });

        Ok(report)
    }

    fn preflight(&self, report: &mut DeployReport) -> DeckhandResult<()> {
        let program = self.provider.program();
        self.emit(DeployEvent::StepStarted {
            step: Step::Preflight,
            command: None,
        });

        match self.runner.locate(program) {
            Some(path) => {
                tracing::debug!(program, path = %path.display(), "provider CLI found");
                self.finish(report, Step::Preflight, CommandStatus::SUCCESS);
                Ok(())
            }
            None => {
                tracing::debug!(program, "provider CLI not on PATH");
                self.emit(DeployEvent::Failed {
                    step: Step::Preflight,
                    code: EXIT_CLI_NOT_FOUND,
                });
                Err(DeckhandError::CliNotFound {
                    program: program.to_string(),
                })
            }
        }
    }

    /// `false` only on a dry run whose login was planned rather than run.
    fn ensure_authenticated(
        &self,
        options: &DeployOptions,
        report: &mut DeployReport,
    ) -> DeckhandResult<bool> {
        let whoami = self.provider.whoami();
        let status = self.query(Step::AuthCheck, &whoami, report)?;

        if status.success() {
            self.skip(report, Step::Login, "already authenticated");
            return Ok(true);
        }

        let login = self.provider.login();
        self.require(Step::Login, &login, options.dry_run, report)?;
        Ok(!options.dry_run)
    }

    fn app_exists(&self, options: &DeployOptions, report: &mut DeployReport) -> DeckhandResult<bool> {
        let probe = self.provider.app_status(&options.app);
        let status = self.query(Step::AppStatus, &probe, report)?;
        Ok(status.success())
    }

    fn provision(&self, options: &DeployOptions, report: &mut DeployReport) -> DeckhandResult<()> {
        let create = self.provider.create_app(&options.app, &options.region);
        self.require(Step::Create, &create, options.dry_run, report)?;

        if options.skip_secret {
            self.skip(report, Step::SecretPrompt, "--skip-secret");
            self.skip(report, Step::SecretSet, "--skip-secret");
            return Ok(());
        }

        let secret = if options.dry_run {
            self.skip(report, Step::SecretPrompt, "dry run");
            Secret::new(String::new())
        } else {
            self.read_secret(options, report)?
        };

        let set = self
            .provider
            .set_secret(&options.app, &options.secret_name, &secret);
        self.require(Step::SecretSet, &set, options.dry_run, report)
    }

    fn read_secret(&self, options: &DeployOptions, report: &mut DeployReport) -> DeckhandResult<Secret> {
        self.emit(DeployEvent::StepStarted {
            step: Step::SecretPrompt,
            command: None,
        });

        let result = match &options.secret_value {
            Some(value) => Ok(value.clone()),
            None => self
                .prompt
                .read_secret(&options.secret_name, &options.secret_prompt),
        };

        let secret = result.and_then(|secret| {
            if secret.is_blank() {
                return Err(DeckhandError::SecretEmpty {
                    name: options.secret_name.to_string(),
                });
            }
            self.provider
                .check_secret(&secret)
                .map_err(|reason| DeckhandError::InvalidValue {
                    field: "value for secret",
                    value: options.secret_name.to_string(),
                    reason,
                })?;
            Ok(secret)
        });

        let secret = match secret {
            Ok(secret) => secret,
            Err(err) => {
                self.emit(DeployEvent::Failed {
                    step: Step::SecretPrompt,
                    code: err.exit_code(),
                });
                return Err(err);
            }
        };

        self.finish(report, Step::SecretPrompt, CommandStatus::SUCCESS);
        Ok(secret)
    }

    /// Run a read-only command. A non-zero exit is an answer, not a failure.
    fn query(
        &self,
        step: Step,
        invocation: &Invocation,
        report: &mut DeployReport,
    ) -> DeckhandResult<CommandStatus> {
        let status = self.spawn(step, invocation)?;
        self.finish(report, step, status);
        Ok(status)
    }

    /// Run a command that must succeed, or plan it on a dry run.
    fn require(
        &self,
        step: Step,
        invocation: &Invocation,
        dry_run: bool,
        report: &mut DeployReport,
    ) -> DeckhandResult<()> {
        if dry_run {
            self.plan(step, invocation, report);
            return Ok(());
        }

        let status = self.spawn(step, invocation)?;
        self.finish(report, step, status);

        if status.success() {
            return Ok(());
        }

        self.emit(DeployEvent::Failed {
            step,
            code: status.code,
        });
        Err(DeckhandError::StepFailed {
            step,
            program: invocation.program.clone(),
            code: status.code,
        })
    }

    fn plan(&self, step: Step, invocation: &Invocation, report: &mut DeployReport) {
        let command = invocation.to_string();
        self.emit(DeployEvent::Planned {
            step,
            command: command.clone(),
        });
        report.steps.push(StepRecord {
            step,
            outcome: StepOutcome::Planned { command },
        });
    }

    fn spawn(&self, step: Step, invocation: &Invocation) -> DeckhandResult<CommandStatus> {
        self.emit(DeployEvent::StepStarted {
            step,
            command: Some(invocation.to_string()),
        });
        tracing::debug!(%step, command = %invocation, "running");

        match self.runner.run(invocation) {
            Ok(status) => {
                tracing::debug!(%step, code = status.code, "finished");
                Ok(status)
            }
            Err(err) => {
                self.emit(DeployEvent::Failed { step, code: 1 });
                Err(err.into())
            }
        }
    }

    fn finish(&self, report: &mut DeployReport, step: Step, status: CommandStatus) {
        self.emit(DeployEvent::StepFinished {
            step,
            code: status.code,
        });
        report.steps.push(StepRecord {
            step,
            outcome: StepOutcome::Ran { code: status.code },
        });
    }

    fn skip(&self, report: &mut DeployReport, step: Step, reason: &str) {
        self.emit(DeployEvent::StepSkipped {
            step,
            reason: reason.to_string(),
        });
        report.steps.push(StepRecord {
            step,
            outcome: StepOutcome::Skipped {
                reason: reason.to_string(),
            },
        });
    }

    fn fill_report(&self, options: &DeployOptions, report: &mut DeployReport) {
        let base = self.provider.app_url(&options.app);

        report.endpoints = options
            .endpoints
            .iter()
            .map(|e| ReportLine::new(e.label.as_str(), join_url(&base, &e.path)))
            .collect();
        report.debug_commands = vec![
            ReportLine::new("Logs", self.provider.logs(&options.app).to_string()),
            ReportLine::new("Shell", self.provider.ssh_console(&options.app).to_string()),
            ReportLine::new("Status", self.provider.status(&options.app).to_string()),
        ];
        report.app_url = base;
    }

    fn emit(&self, event: DeployEvent) {
        self.events.on_event(event);
    }
}

pub(super) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
