//! Provider Port
//!
//! Knows how to phrase each lifecycle operation as a command line for a
//! particular hosting provider's CLI. It never runs anything itself.

use crate::domain::ports::Invocation;
use crate::domain::value_objects::{AppName, Region, Secret, SecretName};

pub trait Provider: Send + Sync {
    /// Executable name looked up on PATH
    fn program(&self) -> &str;

    /// Human-readable hint printed when the program is missing
    fn install_hint(&self) -> &str;

    /// Succeeds only when the operator is logged in
    fn whoami(&self) -> Invocation;

    /// Interactive login
    fn login(&self) -> Invocation;

    /// Succeeds only when `app` exists
    fn app_status(&self, app: &AppName) -> Invocation;

    fn create_app(&self, app: &AppName, region: &Region) -> Invocation;

    /// Register one secret. The value must travel on stdin, never in argv.
    fn set_secret(&self, app: &AppName, name: &SecretName, value: &Secret) -> Invocation;

    /// Reject values `set_secret` cannot carry intact.
    fn check_secret(&self, _value: &Secret) -> Result<(), &'static str> {
        Ok(())
    }

    fn deploy(&self, app: &AppName) -> Invocation;

    fn status(&self, app: &AppName) -> Invocation;

    fn logs(&self, app: &AppName) -> Invocation;

    fn ssh_console(&self, app: &AppName) -> Invocation;

    /// Public base URL of a deployed app, without a trailing slash
    fn app_url(&self, app: &AppName) -> String;
}
