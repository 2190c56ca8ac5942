//! Domain Layer
//!
//! Names the things Deckhand talks about (apps, regions, secrets, steps) and the
//! ports through which it reaches the outside world.
//!
//! ## Structure
//!
//! - `value_objects/` - Validated value types (AppName, Region, SecretName, Secret, Step)
//! - `ports/` - Interface definitions for infrastructure
//!
//! Nothing in this layer spawns a process or reads from the terminal.

pub mod ports;
pub mod value_objects;
