//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::DeployUseCase;
use crate::config::Config;
use crate::domain::ports::{Provider, SecretPrompt};
use crate::infrastructure::{DialoguerPrompt, EnvSecretPrompt, FlyProvider, SystemRunner};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<SystemRunner, Box<dyn SecretPrompt>>;

/// Where the secret for a freshly created app comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// Hidden terminal input
    Terminal { color: bool },
    /// A named environment variable
    Env(String),
}

/// Provider for the configured CLI
pub fn create_provider(config: &Config) -> Box<dyn Provider> {
    Box::new(FlyProvider::new(config.provider.program.as_str()))
}

pub fn create_secret_prompt(source: SecretSource) -> Box<dyn SecretPrompt> {
    match source {
        SecretSource::Terminal { color } => Box::new(DialoguerPrompt::new(color)),
        SecretSource::Env(var) => Box::new(EnvSecretPrompt::new(var)),
    }
}

/// Create a deploy use case with all dependencies wired up
///
/// `json` keeps provider output off stdout so it only carries events.
pub fn create_deploy_use_case(
    config: &Config,
    secret: SecretSource,
    json: bool,
) -> ConcreteDeployUseCase {
    DeployUseCase::new(
        SystemRunner::json(json),
        create_secret_prompt(secret),
        create_provider(config),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_uses_configured_program() {
        let mut config = Config::default();
        config.provider.program = "fly".to_string();

        assert_eq!(create_provider(&config).program(), "fly");
    }

    #[test]
    fn deploy_use_case_wires_provider() {
        let use_case = create_deploy_use_case(
            &Config::default(),
            SecretSource::Terminal { color: false },
            false,
        );
        assert_eq!(use_case.provider().program(), "flyctl");
    }
}
