//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use deckhand::presentation::factory::{self, SecretSource};
//!
//! let use_case = factory::create_deploy_use_case(&config, SecretSource::Terminal { color: true }, false);
//! let report = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{AppArg, Cli, ColorWhen, Commands, DeployArgs};
pub use factory::{create_deploy_use_case, create_provider, SecretSource};
