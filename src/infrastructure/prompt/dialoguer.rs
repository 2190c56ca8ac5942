use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Password;

use crate::domain::ports::SecretPrompt;
use crate::domain::value_objects::{Secret, SecretName};
use crate::error::DeckhandError;

/// Reads the secret from the terminal without echoing it.
pub struct DialoguerPrompt {
    color: bool,
}

impl DialoguerPrompt {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl SecretPrompt for DialoguerPrompt {
    fn read_secret(&self, name: &SecretName, prompt: &str) -> Result<Secret, DeckhandError> {
        let colorful = ColorfulTheme::default();
        let theme: &dyn Theme = if self.color { &colorful } else { &SimpleTheme };

        tracing::debug!(secret = %name, "prompting for secret");

        // Empty input is let through; the deploy sequence rejects it with a
        // dedicated error.
        Password::with_theme(theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map(Secret::new)
            .map_err(|e| DeckhandError::Prompt(e.to_string()))
    }
}
