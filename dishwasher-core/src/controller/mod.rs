//! Run controller
//!
//! Drives the door, filter, pump and engine through one wash cycle and
//! reports the outcome.

pub mod dishwasher;
pub mod result;

pub use dishwasher::{filter_needs_service, DishWasher, MAXIMAL_FILTER_CAPACITY};
pub use result::{RunResult, Status, WashFault};
