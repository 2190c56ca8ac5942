//! `deckhand deploy` (and bare `deckhand`)

use std::sync::Arc;

use anyhow::Result;
use deckhand::application::DeployOptions;
use deckhand::domain::ports::DeployEventSink;
use deckhand::infrastructure::JsonEventSink;
use deckhand::presentation::factory::{create_deploy_use_case, SecretSource};
use deckhand::presentation::DeployArgs;

use super::{GlobalArgs, Session};
use crate::ui::views::deploy::{render_deploy_header, render_deploy_summary, ConsoleEventSink};

pub fn cmd_deploy(args: &DeployArgs, global: GlobalArgs<'_>) -> Result<i32> {
    let Session { config, ui } = Session::load(global)?;

    let options = build_options(&config, args);

    let secret = match &args.secret_from_env {
        Some(var) => SecretSource::Env(var.clone()),
        None => SecretSource::Terminal { color: ui.color },
    };

    let events: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new(ui))
    };

    let use_case = create_deploy_use_case(&config, secret, ui.json).with_events(events);

    if !ui.json {
        println!(
            "{}",
            render_deploy_header(&options, use_case.provider().program(), ui.color, ui.unicode)
        );
    }

    let report = use_case.execute(&options)?;

    if !ui.json {
        print!("{}", render_deploy_summary(&report, ui.color, ui.unicode));
    }

    Ok(0)
}

/// Config values, overridden by whatever was given on the command line
fn build_options(config: &deckhand::Config, args: &DeployArgs) -> DeployOptions {
    let mut options = DeployOptions::from_config(config)
        .with_skip_secret(args.skip_secret)
        .with_dry_run(args.dry_run);

    if let Some(app) = &args.app {
        options = options.with_app(app.clone());
    }
    if let Some(region) = &args.region {
        options = options.with_region(region.clone());
    }
    if let Some(name) = &args.secret_name {
        options = options.with_secret_name(name.clone());
        if config.secret.prompt.is_none() {
            options.secret_prompt = format!("Enter value for {}", name);
        }
    }

    options
}
