//! Common test utilities for deckhand CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment with temp project/home dirs and a fake provider CLI
//! - `FAKE_FLYCTL`: the fake `flyctl` script

#![allow(dead_code)]

pub mod env;
pub mod fake_cli;

pub use env::*;
pub use fake_cli::*;
