use deckhand::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn format_config_warning(w: &ConfigWarning, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };

    let mut out = format!("{} Unknown config key '{}' in {}\n", icon, w.key, location);
    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
    }
    out
}

/// Config warnings go to stderr so they never mix with `--json` output.
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        eprint!("{}", format_config_warning(w, ui.color, ui.unicode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_names_key_location_and_suggestion() {
        let w = ConfigWarning {
            key: "nmae".to_string(),
            file: PathBuf::from("deckhand.toml"),
            line: Some(2),
            suggestion: Some("name".to_string()),
        };

        let rendered = format_config_warning(&w, false, false);
        assert_eq!(
            rendered,
            "[WARN] Unknown config key 'nmae' in deckhand.toml:2\n   Did you mean 'name'?\n"
        );
    }
}
