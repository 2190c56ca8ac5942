//! Deploy Options
//!
//! Configuration types for deploy operations.

use crate::config::{Config, Endpoint};
use crate::domain::value_objects::{AppName, Region, Secret, SecretName};

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Remote application to deploy
    pub app: AppName,
    /// Region used when the app has to be created
    pub region: Region,
    /// Secret provisioned into a freshly created app
    pub secret_name: SecretName,
    /// Text shown when asking for the secret
    pub secret_prompt: String,
    /// Pre-supplied secret (skips the interactive prompt)
    pub secret_value: Option<Secret>,
    /// Create the app without provisioning a secret
    pub skip_secret: bool,
    /// Only run read-only queries; report everything else as planned
    pub dry_run: bool,
    /// Endpoints listed in the final report
    pub endpoints: Vec<Endpoint>,
}

impl DeployOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            app: config.app.name.clone(),
            region: config.app.region.clone(),
            secret_name: config.secret.name.clone(),
            secret_prompt: config.secret.prompt_text(),
            secret_value: None,
            skip_secret: false,
            dry_run: false,
            endpoints: config.report.endpoints.clone(),
        }
    }

    pub fn with_app(mut self, app: AppName) -> Self {
        self.app = app;
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn with_secret_name(mut self, name: SecretName) -> Self {
        self.secret_name = name;
        self
    }

    pub fn with_secret_value(mut self, value: Secret) -> Self {
        self.secret_value = Some(value);
        self
    }

    pub fn with_skip_secret(mut self, skip: bool) -> Self {
        self.skip_secret = skip;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
