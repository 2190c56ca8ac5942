mod system;

pub use system::SystemRunner;
