//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod app_name;
mod region;
mod secret;
mod step;

pub use app_name::AppName;
pub use region::Region;
pub use secret::{Secret, SecretName};
pub use step::Step;
