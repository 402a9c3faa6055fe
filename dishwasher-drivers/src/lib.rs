//! Hardware implementations for the dishwasher controller
//!
//! This crate provides implementations of the capability traits defined
//! in dishwasher-core:
//!
//! - Simulated door, dirt filter, water pump and engine with fault injection
//! - An interaction journal recording every capability call in order
//! - A configuration slot holding the last used program in binary form

#![no_std]
#![deny(unsafe_code)]

pub mod sim;
pub mod storage;

pub use sim::{
    Interaction, Journal, SimDirtFilter, SimDoor, SimEngine, SimRig, SimWasher, SimWaterPump,
    CLEAN_FILTER_CAPACITY, JOURNAL_CAPACITY,
};
pub use storage::{ConfigSlot, SLOT_SIZE};
