//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AppName, Region, SecretName};
use crate::error::DeckhandResult;

use super::loader::{self, LoadedConfig};

/// Provider CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Executable looked up on PATH
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

fn default_program() -> String {
    "flyctl".to_string()
}

/// Remote application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: AppName,

    #[serde(default = "default_region")]
    pub region: Region,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            region: default_region(),
        }
    }
}

fn default_app_name() -> AppName {
    AppName::new("ghl-mcp-server").expect("default app name is valid")
}

fn default_region() -> Region {
    Region::new("iad").expect("default region is valid")
}

/// The secret provisioned when an app is first created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default = "default_secret_name")]
    pub name: SecretName,

    /// Text shown when asking for the value
    #[serde(default)]
    pub prompt: Option<String>,
}

impl Default for SecretConfig {
    fn default() -> Self {
        Self {
            name: default_secret_name(),
            prompt: None,
        }
    }
}

impl SecretConfig {
    pub fn prompt_text(&self) -> String {
        self.prompt
            .clone()
            .unwrap_or_else(|| format!("Enter value for {}", self.name))
    }
}

fn default_secret_name() -> SecretName {
    SecretName::new("GHL_CLIENT_SECRET").expect("default secret name is valid")
}

/// An endpoint listed in the post-deploy report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub label: String,
    pub path: String,
}

impl Endpoint {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Post-deploy report configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<Endpoint>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
        }
    }
}

fn default_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new("Health", "/health"),
        Endpoint::new("MCP (SSE)", "/sse"),
        Endpoint::new("OAuth discovery", "/.well-known/oauth-authorization-server"),
        Endpoint::new("Debug tools", "/debug/tools"),
        Endpoint::new("Debug config", "/debug/config"),
    ]
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub secret: SecretConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Resolve the config for a run: explicit file, project file, user file, defaults,
    /// then `DECKHAND_*` environment overrides.
    pub fn resolve(explicit: Option<&Path>, project_root: &Path) -> DeckhandResult<LoadedConfig> {
        loader::resolve(explicit, project_root)
    }
}

