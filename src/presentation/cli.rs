//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Running without a subcommand performs a deploy with configured defaults

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::{AppName, Region, SecretName};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Deckhand - deploy an app by driving the provider's CLI
#[derive(Parser, Debug)]
#[command(name = "deckhand")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'deckhand' without arguments to deploy the configured app.")]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./deckhand.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the app, creating it and its secret first if needed
    Deploy(DeployArgs),

    /// Check the provider CLI, authentication and app without changing anything
    Check {
        #[command(flatten)]
        target: AppArg,
    },

    /// Show the app's status
    Status {
        #[command(flatten)]
        target: AppArg,
    },

    /// Stream the app's logs
    Logs {
        #[command(flatten)]
        target: AppArg,
    },

    /// Open a console on the app
    Ssh {
        #[command(flatten)]
        target: AppArg,
    },

    /// Explain what a deploy does and how to configure it
    Explain {
        /// Short version (just the essentials)
        #[arg(long)]
        brief: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct AppArg {
    /// App name (overrides config)
    #[arg(long)]
    pub app: Option<AppName>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DeployArgs {
    /// App name (overrides config)
    #[arg(long)]
    pub app: Option<AppName>,

    /// Region used when the app is created
    #[arg(long)]
    pub region: Option<Region>,

    /// Name of the secret provisioned into a new app
    #[arg(long)]
    pub secret_name: Option<SecretName>,

    /// Read the secret from this environment variable instead of prompting
    #[arg(long, value_name = "VAR", conflicts_with = "skip_secret")]
    pub secret_from_env: Option<String>,

    /// Create the app without provisioning a secret
    #[arg(long)]
    pub skip_secret: bool,

    /// Dry run - show what would be done
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_no_subcommand() {
        let cli = Cli::try_parse_from(["deckhand"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn deploy_flags_parse_into_value_objects() {
        let cli = Cli::try_parse_from([
            "deckhand",
            "deploy",
            "--app",
            "billing-api",
            "--region",
            "fra",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Deploy(args)) => {
                assert_eq!(args.app.unwrap().as_str(), "billing-api");
                assert_eq!(args.region.unwrap().as_str(), "fra");
                assert!(args.dry_run);
            }
            other => panic!("expected deploy, got {other:?}"),
        }
    }

    #[test]
    fn invalid_app_name_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["deckhand", "deploy", "--app", "Not_Valid"]).is_err());
    }

    #[test]
    fn secret_from_env_conflicts_with_skip_secret() {
        let result = Cli::try_parse_from([
            "deckhand",
            "deploy",
            "--skip-secret",
            "--secret-from-env",
            "TOKEN",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["deckhand", "status", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
