/// Module containing environment variable helpers used by the configuration
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing path template resolution for endpoint descriptors
pub mod path;

pub use logger::*;
pub use path::*;
