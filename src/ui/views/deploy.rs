use std::io::{self, Write};

use deckhand::application::{DeployOptions, DeployReport, ReportLine};
use deckhand::domain::ports::{DeployEvent, DeployEventSink};
use deckhand::Step;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_deploy_header(
    options: &DeployOptions,
    program: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if options.dry_run {
        "Deckhand Deploy (dry run)"
    } else {
        "Deckhand Deploy"
    };
    let mut header = CommandHeader::new(Icon::Deploy, title);
    header.add("App", options.app.as_str());
    header.add("Region", options.region.as_str());
    header.add("Provider", program);
    header.render(supports_color, supports_unicode)
}

/// One progress line for an event, or `None` if the event is not shown.
pub fn render_step_event(
    event: &DeployEvent,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);
    let dim = |text: &str| ColoredText::dim(text).render(supports_color);

    match event {
        DeployEvent::StepStarted {
            step,
            command: Some(command),
        } => Some(format!(
            "{} {}  {}",
            icon(Icon::Progress),
            step.title(),
            dim(command)
        )),
        DeployEvent::StepStarted { .. } => None,
        DeployEvent::StepFinished { step, code } => match (step, *code) {
            (Step::Preflight, _) if verbose == 0 => None,
            (_, 0) => Some(format!("{} {}", icon(Icon::Success), step.title())),
            (Step::AuthCheck, _) => Some(format!(
                "{} Not logged in, starting login",
                icon(Icon::Warning)
            )),
            (Step::AppStatus, _) => Some(format!(
                "{} App not found, it will be created",
                icon(Icon::Warning)
            )),
            (_, code) => Some(format!(
                "{} {} {}",
                icon(Icon::Error),
                step.title(),
                ColoredText::error(format!("(exit code {})", code)).render(supports_color)
            )),
        },
        DeployEvent::StepSkipped { step, reason } => Some(format!(
            "{} {} {}",
            icon(Icon::Skipped),
            step.title(),
            dim(&format!("(skipped: {})", reason))
        )),
        DeployEvent::Planned { step, command } => Some(format!(
            "{} {}  {}",
            icon(Icon::Planned),
            step.title(),
            ColoredText::info(command.as_str()).render(supports_color)
        )),
        DeployEvent::Started { .. } | DeployEvent::Completed { .. } | DeployEvent::Failed { .. } => {
            None
        }
    }
}

/// Prints progress lines to stdout as the deploy runs.
pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(line) = render_step_event(&event, self.ui.verbose, self.ui.color, self.ui.unicode)
        {
            let mut out = io::stdout().lock();
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }
}

fn rows(lines: &[ReportLine]) -> Vec<(String, String)> {
    lines
        .iter()
        .map(|l| (l.label.clone(), l.value.clone()))
        .collect()
}

pub fn render_deploy_summary(
    report: &DeployReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if report.dry_run {
        ResultSummary::partial(format!("Dry run for {} (nothing changed)", report.app))
    } else if report.created {
        ResultSummary::success(format!("Created and deployed {}", report.app))
    } else {
        ResultSummary::success(format!("Deployed {}", report.app))
    };

    summary.add_section(
        "App",
        vec![("URL".to_string(), report.app_url.clone())],
    );
    summary.add_section("Endpoints", rows(&report.endpoints));
    summary.add_section("Debug", rows(&report.debug_commands));

    if report.dry_run {
        if report.app_exists.is_none() {
            summary.add_warning(format!(
                "Not logged in, so it is unknown whether {} exists; app creation is planned in case it does not",
                report.app
            ));
        }
        summary.with_next_step("Run `deckhand deploy` without --dry-run to apply");
    }

    summary.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand::AppName;

    fn report(dry_run: bool, created: bool) -> DeployReport {
        let mut report = DeployReport::new(AppName::new("ghl-mcp-server").unwrap(), dry_run);
        report.created = created;
        report.app_url = "https://ghl-mcp-server.fly.dev".to_string();
        report.endpoints = vec![ReportLine::new(
            "Health",
            "https://ghl-mcp-server.fly.dev/health",
        )];
        report.debug_commands = vec![ReportLine::new("Logs", "flyctl logs --app ghl-mcp-server")];
        report
    }

    #[test]
    fn header_lists_app_and_region() {
        let options = DeployOptions::default();
        let rendered = render_deploy_header(&options, "flyctl", false, false);
        assert!(rendered.starts_with("[DEPLOY] Deckhand Deploy\n"));
        assert!(rendered.contains("App: ghl-mcp-server"));
        assert!(rendered.contains("Region: iad"));
    }

    #[test]
    fn summary_lists_urls_and_debug_commands() {
        let rendered = render_deploy_summary(&report(false, true), false, false);
        assert!(rendered.contains("[OK] Created and deployed ghl-mcp-server"));
        assert!(rendered.contains("https://ghl-mcp-server.fly.dev/health"));
        assert!(rendered.contains("flyctl logs --app ghl-mcp-server"));
    }

    #[test]
    fn dry_run_summary_points_to_real_run() {
        let rendered = render_deploy_summary(&report(true, true), false, false);
        assert!(rendered.contains("[WARN] Dry run for ghl-mcp-server"));
        assert!(rendered.contains("without --dry-run"));
    }

    #[test]
    fn dry_run_summary_flags_unknown_app_existence() {
        let mut unknown = report(true, false);
        unknown.app_exists = None;
        let rendered = render_deploy_summary(&unknown, false, false);
        assert!(rendered.contains("unknown whether ghl-mcp-server exists"));

        let mut known = report(true, true);
        known.app_exists = Some(false);
        let rendered = render_deploy_summary(&known, false, false);
        assert!(!rendered.contains("unknown whether"));
    }

    #[test]
    fn failed_auth_check_is_not_an_error_line() {
        let line = render_step_event(
            &DeployEvent::StepFinished {
                step: Step::AuthCheck,
                code: 1,
            },
            0,
            false,
            false,
        )
        .unwrap();
        assert_eq!(line, "[WARN] Not logged in, starting login");
    }

    #[test]
    fn failed_deploy_shows_exit_code() {
        let line = render_step_event(
            &DeployEvent::StepFinished {
                step: Step::Deploy,
                code: 3,
            },
            0,
            false,
            false,
        )
        .unwrap();
        assert_eq!(line, "[FAIL] Deploying (exit code 3)");
    }

    #[test]
    fn skipped_step_shows_reason() {
        let line = render_step_event(
            &DeployEvent::StepSkipped {
                step: Step::Create,
                reason: "app 'x' already exists".to_string(),
            },
            0,
            false,
            false,
        )
        .unwrap();
        assert_eq!(line, "[SKIP] Creating app (skipped: app 'x' already exists)");
    }

    #[test]
    fn preflight_success_is_quiet_unless_verbose() {
        let event = DeployEvent::StepFinished {
            step: Step::Preflight,
            code: 0,
        };
        assert!(render_step_event(&event, 0, false, false).is_none());
        assert!(render_step_event(&event, 1, false, false).is_some());
    }
}
