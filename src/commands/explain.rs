use std::fmt::Write as _;

use anyhow::Result;
use deckhand::Step;

const STEPS: &[(Step, &str)] = &[
    (Step::Preflight, "provider CLI must be on PATH (exit 127 if not)"),
    (Step::AuthCheck, "whoami; on failure run login"),
    (Step::Login, "only if the auth check failed"),
    (Step::AppStatus, "does the app exist?"),
    (Step::Create, "new app only"),
    (Step::SecretPrompt, "new app only, hidden input"),
    (Step::SecretSet, "new app only, value sent on stdin"),
    (Step::Deploy, "always"),
    (Step::FinalStatus, "then print URLs"),
];

pub fn cmd_explain(brief: bool, json: bool, verbose: u8) -> Result<i32> {
    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "explain",
            "brief": brief,
            "verbose": verbose
        }))?;

        let steps: Vec<_> = STEPS
            .iter()
            .map(|(step, what)| serde_json::json!({ "step": step, "description": what }))
            .collect();

        let output = serde_json::json!({
            "name": "deckhand",
            "version": env!("CARGO_PKG_VERSION"),
            "purpose": "Deploy an app by driving the hosting provider's CLI",
            "steps": steps,
            "config_files": ["deckhand.toml", "$XDG_CONFIG_HOME/deckhand/config.toml"],
            "env": {
                "DECKHAND_APP": "App name",
                "DECKHAND_REGION": "Region for new apps",
                "DECKHAND_SECRET_NAME": "Secret provisioned into new apps",
                "DECKHAND_PROVIDER_BIN": "Provider CLI executable",
                "DECKHAND_NO_COLOR": "Disable colors"
            },
            "commands": {
                "deckhand": "Deploy the configured app",
                "deckhand deploy --dry-run": "Show what would run without changing anything",
                "deckhand check": "Verify the provider CLI, login and app",
                "deckhand status": "Show app status",
                "deckhand logs": "Stream app logs",
                "deckhand ssh": "Open a console on the app"
            }
        });

        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "explain",
            "data": output
        }))?;
        return Ok(0);
    }

    println!("deckhand v{}", env!("CARGO_PKG_VERSION"));
    println!("Deploys an app by driving the hosting provider's CLI.\n");
    print!("{}", render_explain(brief, verbose));
    Ok(0)
}

pub(crate) fn render_explain(brief: bool, verbose: u8) -> String {
    let mut out = String::new();

    out.push_str("STEPS:\n");
    for (i, (step, what)) in STEPS.iter().enumerate() {
        let _ = writeln!(out, "  {}. {:<14}{}", i + 1, step.as_str(), what);
    }
    out.push('\n');

    out.push_str("KEY COMMANDS:\n");
    out.push_str("  deckhand\n");
    out.push_str("  deckhand deploy [--app NAME] [--region CODE] [--dry-run] [--skip-secret]\n");
    out.push_str("  deckhand check\n");
    out.push_str("  deckhand status | logs | ssh\n");

    if brief {
        return out;
    }

    out.push_str("\nCONFIG (deckhand.toml):\n");
    out.push_str("  [provider] program = \"flyctl\"\n");
    out.push_str("  [app]      name = \"ghl-mcp-server\", region = \"iad\"\n");
    out.push_str("  [secret]   name = \"GHL_CLIENT_SECRET\", prompt = \"...\"\n");
    out.push_str("  [[report.endpoints]] label = \"Health\", path = \"/health\"\n");
    out.push_str("  [output]   color = \"auto\", unicode = true\n\n");

    out.push_str("ENVIRONMENT:\n");
    out.push_str("  DECKHAND_APP, DECKHAND_REGION, DECKHAND_SECRET_NAME,\n");
    out.push_str("  DECKHAND_PROVIDER_BIN, DECKHAND_NO_COLOR, RUST_LOG\n\n");

    out.push_str("EXIT CODES:\n");
    out.push_str("  0    success\n");
    out.push_str("  127  provider CLI not found\n");
    out.push_str("  N    exit code of the first provider command that failed\n");

    if verbose > 0 {
        out.push_str("\nEXAMPLES:\n");
        out.push_str("  # First deploy of a new app, secret from CI\n");
        out.push_str("  deckhand deploy --app billing-api --region fra --secret-from-env API_KEY\n\n");
        out.push_str("  # See every command without running anything\n");
        out.push_str("  deckhand deploy --dry-run\n\n");
        out.push_str("  # Machine-readable events\n");
        out.push_str("  deckhand --json deploy\n");
    }

    out
}
