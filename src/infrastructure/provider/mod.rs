//! Provider CLI adapters

mod fly;

pub use fly::FlyProvider;
