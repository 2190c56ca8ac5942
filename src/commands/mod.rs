//! Command entry points
//!
//! Each command loads configuration, builds the UI context and calls into the
//! library. They return the process exit code.

pub mod check;
pub mod deploy;
pub mod explain;
pub mod passthrough;

use std::path::Path;

use anyhow::Result;
use deckhand::config::{Config, LoadedConfig};
use deckhand::presentation::ColorWhen;

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Global flags shared by every command
#[derive(Debug, Clone, Copy)]
pub struct GlobalArgs<'a> {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
    pub config: Option<&'a Path>,
}

/// Resolved configuration plus the UI context derived from it
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
}

impl Session {
    pub fn load(args: GlobalArgs<'_>) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let LoadedConfig {
            config,
            source,
            warnings,
        } = Config::resolve(args.config, &project_root)?;

        let ui = UiContext::new(args.json, args.verbose, args.color, &config);
        match &source {
            Some(path) => tracing::debug!(path = %path.display(), app = %config.app.name, "configuration resolved"),
            None => tracing::debug!(app = %config.app.name, "using built-in configuration"),
        }
        print_config_warnings(&warnings, &ui);

        Ok(Self { config, ui })
    }
}
