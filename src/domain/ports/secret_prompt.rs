//! Secret Prompt Port

use crate::domain::value_objects::{Secret, SecretName};
use crate::error::DeckhandError;

/// Source of the one secret value a fresh app needs
pub trait SecretPrompt {
    /// Ask for the value of `name`, showing `prompt` to the operator.
    fn read_secret(&self, name: &SecretName, prompt: &str) -> Result<Secret, DeckhandError>;
}

impl<T: SecretPrompt + ?Sized> SecretPrompt for &T {
    fn read_secret(&self, name: &SecretName, prompt: &str) -> Result<Secret, DeckhandError> {
        (**self).read_secret(name, prompt)
    }
}

impl<T: SecretPrompt + ?Sized> SecretPrompt for Box<T> {
    fn read_secret(&self, name: &SecretName, prompt: &str) -> Result<Secret, DeckhandError> {
        (**self).read_secret(name, prompt)
    }
}
