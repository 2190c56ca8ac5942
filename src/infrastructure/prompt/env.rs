use crate::domain::ports::SecretPrompt;
use crate::domain::value_objects::{Secret, SecretName};
use crate::error::DeckhandError;

/// Takes the secret from a named environment variable instead of asking.
pub struct EnvSecretPrompt {
    var: String,
    get_env: Box<dyn Fn(&str) -> Option<String>>,
}

impl EnvSecretPrompt {
    pub fn new(var: impl Into<String>) -> Self {
        Self::with_env(var, |key| std::env::var(key).ok())
    }

    pub fn with_env(
        var: impl Into<String>,
        get_env: impl Fn(&str) -> Option<String> + 'static,
    ) -> Self {
        Self {
            var: var.into(),
            get_env: Box::new(get_env),
        }
    }
}

impl SecretPrompt for EnvSecretPrompt {
    fn read_secret(&self, name: &SecretName, _prompt: &str) -> Result<Secret, DeckhandError> {
        tracing::debug!(secret = %name, var = %self.var, "reading secret from environment");

        match (self.get_env)(&self.var) {
            Some(value) => Ok(Secret::new(value)),
            None => Err(DeckhandError::Prompt(format!(
                "environment variable {} is not set",
                self.var
            ))),
        }
    }
}
