//! Deckhand - deploy an application by driving its hosting provider's CLI
//!
//! Deckhand checks that the provider CLI is installed, makes sure the operator
//! is logged in, creates the app and provisions its secret on first deploy,
//! deploys, and reports where the app can be reached.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckUseCase, DeployOptions, DeployReport, DeployUseCase};
pub use config::Config;
pub use domain::value_objects::{AppName, Region, Secret, SecretName, Step};
pub use error::{DeckhandError, DeckhandResult};
