//! Secret Value Objects
//!
//! A `Secret` is read once, handed to the provider once, and dropped. It has
//! no `Display` and its `Debug` output is redacted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeckhandError;

/// Name of the environment variable the secret is exposed as in the app
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretName(String);

impl SecretName {
    pub fn new(name: impl Into<String>) -> Result<Self, DeckhandError> {
        let name = name.into();
        let mut bytes = name.bytes();
        let valid = match bytes.next() {
            Some(first) => {
                (first.is_ascii_uppercase() || first == b'_')
                    && bytes.all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
            }
            None => false,
        };

        if !valid {
            return Err(DeckhandError::InvalidValue {
                field: "secret name",
                value: name,
                reason: "expected an upper-case identifier like API_KEY",
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SecretName {
    type Err = DeckhandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SecretName {
    type Error = DeckhandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SecretName> for String {
    fn from(value: SecretName) -> Self {
        value.0
    }
}

/// Secret value entered by the operator
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Borrow the raw value. Only the process layer should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}
