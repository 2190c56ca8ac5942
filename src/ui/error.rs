use deckhand::domain::ports::Provider;
use deckhand::error::DeckhandError;
use deckhand::infrastructure::FlyProvider;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

/// Process exit code for an error bubbling out of a command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DeckhandError>()
        .map(DeckhandError::exit_code)
        .unwrap_or(1)
}

fn hint(err: &DeckhandError) -> Option<String> {
    match err {
        DeckhandError::CliNotFound { .. } => {
            Some(FlyProvider::default().install_hint().to_string())
        }
        DeckhandError::SecretEmpty { .. } => Some(
            "Enter a value, pass --secret-from-env <VAR>, or use --skip-secret.".to_string(),
        ),
        DeckhandError::Config { .. } => Some("Fix the config file and try again.".to_string()),
        _ => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    if let Some(hint) = err.downcast_ref::<DeckhandError>().and_then(hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }

    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
            "exit_code": exit_code(err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = detect_capabilities();
    if caps.is_github_actions {
        println!(
            "{}",
            github_actions_annotation(AnnotationLevel::Error, &err.to_string(), Some("deckhand"))
        );
    }

    eprint!(
        "{}",
        format_error_with(err, caps.supports_color, caps.supports_unicode)
    );
}
