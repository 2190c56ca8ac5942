use anyhow::Result;
use deckhand::application::{CheckStatus, CheckUseCase};
use deckhand::infrastructure::SystemRunner;
use deckhand::presentation::{create_provider, AppArg};

use super::{GlobalArgs, Session};
use crate::ui::blocks::check_item::render_check_item;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::views::check::{render_check_header, render_check_summary};

pub fn cmd_check(target: &AppArg, global: GlobalArgs<'_>) -> Result<i32> {
    let Session { config, ui } = Session::load(global)?;
    let app = target.app.clone().unwrap_or_else(|| config.app.name.clone());
    let provider = create_provider(&config);

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "check",
            "app": app.as_str(),
            "program": provider.program(),
        }))?;
    } else {
        println!(
            "{}",
            render_check_header(app.as_str(), provider.program(), ui.color, ui.unicode)
        );
    }

    let use_case = CheckUseCase::new(SystemRunner::new(), provider.as_ref());
    let result = use_case.execute_with_callback(&app, |item| {
        if ui.json {
            let status = match item.status {
                CheckStatus::Pass => "pass",
                CheckStatus::Warning => "warning",
                CheckStatus::Error => "error",
            };
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "check",
                "command": "check",
                "name": item.name,
                "status": status,
                "message": item.message,
                "recommendation": item.recommendation,
            }));
        } else {
            print!("{}", render_check_item(item, ui.color, ui.unicode));
        }
    })?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "passes": result.passed,
            "warnings": result.warnings,
            "errors": result.errors,
            "success": result.is_success(),
        }))?;
    } else {
        print!("{}", render_check_summary(&result, ui.color, ui.unicode));
    }

    if !ui.json && ui.caps.is_github_actions {
        for item in &result.items {
            let level = match item.status {
                CheckStatus::Pass => continue,
                CheckStatus::Warning => AnnotationLevel::Warning,
                CheckStatus::Error => AnnotationLevel::Error,
            };
            println!(
                "{}",
                github_actions_annotation(level, &item.message, Some(item.name.as_str()))
            );
        }
    }

    Ok(if result.is_success() { 0 } else { 1 })
}
