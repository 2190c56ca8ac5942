//! Configuration module for Deckhand
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DECKHAND_*)
//! 3. `--config <PATH>`, or project config (./deckhand.toml)
//! 4. User config (~/.config/deckhand/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, with_env_overrides, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    AppConfig, ColorMode, Config, Endpoint, OutputConfig, ProviderConfig, ReportConfig,
    SecretConfig,
};
