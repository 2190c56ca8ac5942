//! Fly.io provider
//!
//! Phrases each lifecycle operation as a `flyctl` command line.

use crate::domain::ports::{Invocation, Provider};
use crate::domain::value_objects::{AppName, Region, Secret, SecretName};

pub struct FlyProvider {
    program: String,
}

impl FlyProvider {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn invoke<'a>(&self, args: impl IntoIterator<Item = &'a str>) -> Invocation {
        Invocation::new(self.program.as_str(), args)
    }
}

impl Default for FlyProvider {
    fn default() -> Self {
        Self::new("flyctl")
    }
}

impl Provider for FlyProvider {
    fn program(&self) -> &str {
        &self.program
    }

    fn install_hint(&self) -> &str {
        "Install it from https://fly.io/docs/flyctl/install/ and make sure it is on your PATH."
    }

    fn whoami(&self) -> Invocation {
        self.invoke(["auth", "whoami"])
    }

    fn login(&self) -> Invocation {
        self.invoke(["auth", "login"])
    }

    fn app_status(&self, app: &AppName) -> Invocation {
        self.invoke(["status", "--app", app.as_str()])
    }

    fn create_app(&self, app: &AppName, region: &Region) -> Invocation {
        self.invoke([
            "launch",
            "--name",
            app.as_str(),
            "--region",
            region.as_str(),
            "--no-deploy",
            "--copy-config",
            "--yes",
        ])
    }

    fn set_secret(&self, app: &AppName, name: &SecretName, value: &Secret) -> Invocation {
        self.invoke(["secrets", "import", "--app", app.as_str()])
            .with_stdin(import_payload(name, value))
    }

    fn check_secret(&self, value: &Secret) -> Result<(), &'static str> {
        // The import format has no escape for its own quote delimiter.
        if value.expose().contains(TRIPLE_QUOTE) {
            return Err("must not contain \"\"\"");
        }
        Ok(())
    }

    fn deploy(&self, app: &AppName) -> Invocation {
        self.invoke(["deploy", "--app", app.as_str()])
    }

    fn status(&self, app: &AppName) -> Invocation {
        self.invoke(["status", "--app", app.as_str()])
    }

    fn logs(&self, app: &AppName) -> Invocation {
        self.invoke(["logs", "--app", app.as_str()])
    }

    fn ssh_console(&self, app: &AppName) -> Invocation {
        self.invoke(["ssh", "console", "--app", app.as_str()])
    }

    fn app_url(&self, app: &AppName) -> String {
        format!("https://{}.fly.dev", app)
    }
}

const TRIPLE_QUOTE: &str = "\"\"\"";

/// `NAME=value` line for `flyctl secrets import`; multi-line values use triple quotes.
fn import_payload(name: &SecretName, value: &Secret) -> Secret {
    let raw = value.expose();
    if raw.contains('\n') {
        Secret::new(format!("{name}={TRIPLE_QUOTE}{raw}{TRIPLE_QUOTE}\n"))
    } else {
        Secret::new(format!("{}={}\n", name, raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppName {
        AppName::new("ghl-mcp-server").unwrap()
    }

    #[test]
    fn create_passes_name_and_region() {
        let inv = FlyProvider::default().create_app(&app(), &Region::new("fra").unwrap());
        assert_eq!(
            inv.to_string(),
            "flyctl launch --name ghl-mcp-server --region fra --no-deploy --copy-config --yes"
        );
    }

    #[test]
    fn secret_travels_on_stdin_not_argv() {
        let name = SecretName::new("API_KEY").unwrap();
        let inv = FlyProvider::default().set_secret(&app(), &name, &Secret::new("s3cr3t"));

        assert!(inv.args.iter().all(|a| !a.contains("s3cr3t")));
        assert_eq!(inv.stdin.as_ref().map(Secret::expose), Some("API_KEY=s3cr3t\n"));
    }

    #[test]
    fn multiline_secret_is_triple_quoted() {
        let name = SecretName::new("PEM").unwrap();
        let inv = FlyProvider::default().set_secret(&app(), &name, &Secret::new("a\nb"));

        assert_eq!(
            inv.stdin.as_ref().map(Secret::expose),
            Some("PEM=\"\"\"a\nb\"\"\"\n")
        );
    }

    #[test]
    fn triple_quotes_cannot_be_imported() {
        let fly = FlyProvider::default();
        assert!(fly.check_secret(&Secret::new("plain")).is_ok());
        assert!(fly.check_secret(&Secret::new("line\nbreak")).is_ok());
        assert!(fly.check_secret(&Secret::new("\"\"\"starts")).is_err());
        assert!(fly.check_secret(&Secret::new("a\n\"\"\"\nb")).is_err());
    }

    #[test]
    fn custom_program_is_used_everywhere() {
        let fly = FlyProvider::new("fly");
        assert_eq!(fly.program(), "fly");
        assert_eq!(fly.deploy(&app()).program, "fly");
        assert_eq!(fly.logs(&app()).to_string(), "fly logs --app ghl-mcp-server");
    }

    #[test]
    fn app_url_uses_fly_dev() {
        assert_eq!(
            FlyProvider::default().app_url(&app()),
            "https://ghl-mcp-server.fly.dev"
        );
    }
}
