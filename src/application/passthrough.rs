//! Debug entry points
//!
//! `status`, `logs` and `ssh` hand the terminal to the provider CLI for the
//! configured app and report its exit code unchanged.

use crate::domain::ports::{CommandRunner, Provider};
use crate::domain::value_objects::AppName;
use crate::error::{DeckhandError, DeckhandResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugCommand {
    Status,
    Logs,
    Ssh,
}

/// Run one debug command; returns the provider's exit code.
pub fn run_debug_command<R: CommandRunner>(
    runner: &R,
    provider: &dyn Provider,
    app: &AppName,
    command: DebugCommand,
) -> DeckhandResult<i32> {
    let program = provider.program();
    if runner.locate(program).is_none() {
        return Err(DeckhandError::CliNotFound {
            program: program.to_string(),
        });
    }

    let invocation = match command {
        DebugCommand::Status => provider.status(app),
        DebugCommand::Logs => provider.logs(app),
        DebugCommand::Ssh => provider.ssh_console(app),
    };
    tracing::debug!(command = %invocation, "running");

    let status = runner.run(&invocation)?;
    Ok(status.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{CapturedOutput, CommandStatus, Invocation, RunError};
    use crate::infrastructure::FlyProvider;
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct Recorder {
        installed: bool,
        code: i32,
        seen: RefCell<Vec<String>>,
    }

    impl Recorder {
        fn new(installed: bool, code: i32) -> Self {
            Self {
                installed,
                code,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for Recorder {
        fn locate(&self, program: &str) -> Option<PathBuf> {
            self.installed.then(|| PathBuf::from(program))
        }

        fn run(&self, invocation: &Invocation) -> Result<CommandStatus, RunError> {
            self.seen.borrow_mut().push(invocation.to_string());
            Ok(CommandStatus::from_code(self.code))
        }

        fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput, RunError> {
            Ok(CapturedOutput {
                status: self.run(invocation)?,
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }

    fn app() -> AppName {
        AppName::new("ghl-mcp-server").unwrap()
    }

    #[test]
    fn ssh_opens_console_for_app() {
        let runner = Recorder::new(true, 0);
        let code =
            run_debug_command(&runner, &FlyProvider::default(), &app(), DebugCommand::Ssh).unwrap();

        assert_eq!(code, 0);
        assert_eq!(
            runner.seen.borrow().as_slice(),
            ["flyctl ssh console --app ghl-mcp-server"]
        );
    }

    #[test]
    fn exit_code_is_passed_through() {
        let runner = Recorder::new(true, 5);
        let code =
            run_debug_command(&runner, &FlyProvider::default(), &app(), DebugCommand::Logs).unwrap();
        assert_eq!(code, 5);
    }

    #[test]
    fn missing_cli_runs_nothing() {
        let runner = Recorder::new(false, 0);
        let err = run_debug_command(&runner, &FlyProvider::default(), &app(), DebugCommand::Status)
            .unwrap_err();

        assert_eq!(err.exit_code(), 127);
        assert!(runner.seen.borrow().is_empty());
    }
}
