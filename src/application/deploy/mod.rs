//! Deploy Module
//!
//! Orchestrates one deploy through the provider CLI.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployReport`, `StepOutcome`)
//! - `use_case` - The step sequence (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use deckhand::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(runner, prompt, provider);
//! let report = use_case.execute(&DeployOptions::from_config(&config))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployReport, ReportLine, StepOutcome, StepRecord};
pub use use_case::DeployUseCase;
