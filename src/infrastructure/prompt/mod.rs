//! Secret sources
//!
//! - DialoguerPrompt: hidden terminal input
//! - EnvSecretPrompt: read from an environment variable (CI)

mod dialoguer;
mod env;

pub use self::dialoguer::DialoguerPrompt;
pub use self::env::EnvSecretPrompt;
