//! Board-agnostic core logic for the dishwasher controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware capability traits (door, dirt filter, water pump, engine)
//! - Washing programs, fill levels and run configuration
//! - The run controller and its result/status types

#![no_std]
#![deny(unsafe_code)]

// Test-only: proptest assertions expand to `format!`
#[cfg(test)]
#[macro_use]
extern crate std;

// Must come first so the logging macros are visible to later modules
#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod traits;

pub use config::{BuildError, FillLevel, ProgramConfiguration, WashingProgram};
pub use controller::{DishWasher, RunResult, Status, WashFault, MAXIMAL_FILTER_CAPACITY};
pub use traits::{DirtFilter, Door, Engine, EngineError, PumpError, WaterPump};
