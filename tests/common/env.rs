//! Test environment builder for isolated deckhand testing.
//!
//! Provides `TestEnv` - temp directories for the project, HOME and a `bin/`
//! holding the fake provider CLI, plus helpers to run the deckhand binary.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a deckhand CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// - `project_root` is the working directory (where `deckhand.toml` is looked up)
/// - `home_dir` stands in for HOME and XDG_CONFIG_HOME
/// - `bin_dir` is first on PATH and holds the fake `flyctl`
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    pub bin_dir: TempDir,
    deckhand_bin: PathBuf,
}

impl TestEnv {
    /// Environment with the fake `flyctl` installed
    pub fn new() -> Self {
        let env = Self::without_cli();
        #[cfg(unix)]
        super::fake_cli::install_fake_cli(env.bin_dir.path(), "flyctl");
        env
    }

    /// Environment with nothing on the extra PATH entry
    pub fn without_cli() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin_dir: TempDir::new().expect("Failed to create bin dir"),
            deckhand_bin: PathBuf::from(env!("CARGO_BIN_EXE_deckhand")),
        }
    }

    /// File the fake CLI appends its argv to
    pub fn log_path(&self) -> PathBuf {
        self.home_dir.path().join("fly.log")
    }

    /// Provider invocations in order, one `"arg arg ..."` string each
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Everything the fake CLI received on stdin for `secrets import`
    pub fn secret_stdin(&self) -> String {
        let mut path = self.log_path().into_os_string();
        path.push(".stdin");
        std::fs::read_to_string(path).unwrap_or_default()
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_root.path().join(relative_path);
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run deckhand in this environment from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run deckhand with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let path = format!("{}:/usr/bin:/bin", self.bin_dir.path().display());

        let mut cmd = Command::new(&self.deckhand_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_clear()
            .env("PATH", path)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("FAKE_FLY_LOG", self.log_path())
            .env("DECKHAND_NO_COLOR", "1")
            .env("LANG", "C");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute deckhand");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
