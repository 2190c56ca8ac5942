use deckhand::application::CheckResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_check_header(
    app: &str,
    program: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "Deckhand Check");
    header.add("App", app);
    header.add("Provider", program);
    header.render(supports_color, supports_unicode)
}

pub fn render_check_summary(
    result: &CheckResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if !result.is_success() {
        "Check FAILED"
    } else if result.warnings > 0 {
        "Check passed with warnings"
    } else {
        "All checks passed"
    };

    let mut summary = if result.is_clean() {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };

    if result.is_success() {
        summary.with_next_step("Run `deckhand deploy` to deploy");
    }

    summary.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand::application::{CheckItem, CheckStatus};

    fn result(errors: usize, warnings: usize) -> CheckResult {
        CheckResult {
            items: vec![CheckItem {
                name: "App".to_string(),
                status: CheckStatus::Warning,
                message: "missing".to_string(),
                recommendation: None,
            }],
            passed: 2,
            warnings,
            errors,
        }
    }

    #[test]
    fn summary_reports_failure() {
        let rendered = render_check_summary(&result(1, 0), false, false);
        assert!(rendered.contains("[WARN] Check FAILED"));
        assert!(!rendered.contains("Next:"));
    }

    #[test]
    fn summary_with_warnings_still_passes() {
        let rendered = render_check_summary(&result(0, 1), false, false);
        assert!(rendered.contains("Check passed with warnings"));
        assert!(rendered.contains("deckhand deploy"));
    }

    #[test]
    fn header_names_app() {
        let rendered = render_check_header("billing-api", "flyctl", false, false);
        assert!(rendered.contains("[CHECK] Deckhand Check"));
        assert!(rendered.contains("App: billing-api"));
    }
}
