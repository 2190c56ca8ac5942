//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - The fail-fast deploy sequence
//! - `CheckUseCase` - Read-only doctor for the local setup
//! - `run_debug_command` - status/logs/ssh pass-through

pub mod check;
pub mod deploy;
pub mod passthrough;

pub use check::{CheckItem, CheckResult, CheckStatus, CheckUseCase};
pub use deploy::{DeployOptions, DeployReport, DeployUseCase, ReportLine, StepOutcome, StepRecord};
pub use passthrough::{run_debug_command, DebugCommand};
