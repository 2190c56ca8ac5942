//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process/` - Spawning the provider CLI
//! - `prompt/` - Secret sources (terminal, environment)
//! - `provider/` - Provider CLI argv builders
//! - `events/` - Event sinks

pub mod events;
pub mod process;
pub mod prompt;
pub mod provider;

// Re-export for convenience
pub use events::JsonEventSink;
pub use process::SystemRunner;
pub use prompt::{DialoguerPrompt, EnvSecretPrompt};
pub use provider::FlyProvider;
