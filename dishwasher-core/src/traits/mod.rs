//! Hardware capability traits
//!
//! These traits define the interface between the run controller
//! and hardware-specific implementations.

pub mod door;
pub mod engine;
pub mod filter;
pub mod pump;

pub use door::Door;
pub use engine::{Engine, EngineError};
pub use filter::DirtFilter;
pub use pump::{PumpError, WaterPump};
