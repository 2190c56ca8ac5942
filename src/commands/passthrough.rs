//! `deckhand status`, `deckhand logs`, `deckhand ssh`

use anyhow::Result;
use deckhand::application::{run_debug_command, DebugCommand};
use deckhand::infrastructure::SystemRunner;
use deckhand::presentation::{create_provider, AppArg};

use super::{GlobalArgs, Session};

pub fn cmd_passthrough(command: DebugCommand, target: &AppArg, global: GlobalArgs<'_>) -> Result<i32> {
    let Session { config, ui } = Session::load(global)?;
    let app = target.app.clone().unwrap_or_else(|| config.app.name.clone());
    let provider = create_provider(&config);

    let name = match command {
        DebugCommand::Status => "status",
        DebugCommand::Logs => "logs",
        DebugCommand::Ssh => "ssh",
    };

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": name,
            "app": app.as_str(),
        }))?;
    }

    let code = run_debug_command(&SystemRunner::json(ui.json), provider.as_ref(), &app, command)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": name,
            "exit_code": code,
        }))?;
    }

    Ok(code)
}
