//! Deckhand CLI - deploy an app by driving the provider's CLI
//!
//! Usage: deckhand [COMMAND]
//!
//! Commands:
//!   deploy   Deploy the app (default when no command is given)
//!   check    Check the provider CLI, login and app
//!   status   Show the app's status
//!   logs     Stream the app's logs
//!   ssh      Open a console on the app
//!   explain  Explain what a deploy does

use anyhow::Result;
use clap::Parser;

use deckhand::application::DebugCommand;
use deckhand::presentation::{Cli, Commands, DeployArgs};

mod commands;
mod logging;
mod ui;

use commands::GlobalArgs;

fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let json = cli.json;
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            ui::error::print_error(&err, json);
            ui::error::exit_code(&err)
        }
    };

    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let global = GlobalArgs {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
        config: cli.config.as_deref(),
    };

    match cli.command {
        None => commands::deploy::cmd_deploy(&DeployArgs::default(), global),
        Some(Commands::Deploy(args)) => commands::deploy::cmd_deploy(&args, global),
        Some(Commands::Check { target }) => commands::check::cmd_check(&target, global),
        Some(Commands::Status { target }) => {
            commands::passthrough::cmd_passthrough(DebugCommand::Status, &target, global)
        }
        Some(Commands::Logs { target }) => {
            commands::passthrough::cmd_passthrough(DebugCommand::Logs, &target, global)
        }
        Some(Commands::Ssh { target }) => {
            commands::passthrough::cmd_passthrough(DebugCommand::Ssh, &target, global)
        }
        Some(Commands::Explain { brief }) => {
            commands::explain::cmd_explain(brief, cli.json, cli.verbose)
        }
    }
}
