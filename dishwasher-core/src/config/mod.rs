//! Configuration types
//!
//! Washing programs, fill levels and the per-run program configuration.
//! With the `serde` feature the configuration can be stored as postcard
//! binary data.

pub mod program;
pub mod types;

#[cfg(feature = "serde")]
pub mod persist;

pub use program::{FillLevel, WashingProgram};
pub use types::{BuildError, ProgramConfiguration, ProgramConfigurationBuilder};

#[cfg(feature = "serde")]
pub use persist::ConfigError;
