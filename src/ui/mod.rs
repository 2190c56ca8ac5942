//! Terminal UI
//!
//! Capability detection, design tokens, and the renderers used by commands.

pub mod blocks;
pub mod ci;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
