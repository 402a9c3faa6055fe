//! Simulated hardware
//!
//! Stand-ins for the door, dirt filter, water pump and engine. Every device
//! records its calls in a shared [`Journal`].
//!
//! ```ignore
//! let journal = Journal::new();
//! let mut rig = SimRig::new(&journal);
//! rig.pump.fail_drain_with(PumpError::Blocked);
//!
//! let result = rig.washer().start(config);
//! assert_eq!(result.status(), Status::ErrorPump);
//! ```

pub mod door;
pub mod engine;
pub mod filter;
pub mod journal;
pub mod pump;

pub use door::SimDoor;
pub use engine::SimEngine;
pub use filter::SimDirtFilter;
pub use journal::{Interaction, Journal, JOURNAL_CAPACITY};
pub use pump::SimWaterPump;

use dishwasher_core::controller::{DishWasher, MAXIMAL_FILTER_CAPACITY};

/// Filter reading a freshly cleaned filter reports
pub const CLEAN_FILTER_CAPACITY: f64 = MAXIMAL_FILTER_CAPACITY * 2.0;

/// Controller wired to borrowed simulated devices
pub type SimWasher<'r, 'j> = DishWasher<
    &'r mut SimWaterPump<'j>,
    &'r mut SimEngine<'j>,
    &'r mut SimDirtFilter<'j>,
    &'r mut SimDoor<'j>,
>;

/// A complete set of simulated devices sharing one journal
pub struct SimRig<'j> {
    /// Water pump
    pub pump: SimWaterPump<'j>,
    /// Wash engine
    pub engine: SimEngine<'j>,
    /// Dirt filter sensor
    pub filter: SimDirtFilter<'j>,
    /// Door latch
    pub door: SimDoor<'j>,
}

impl<'j> SimRig<'j> {
    /// Healthy appliance: door closed, clean filter, no faults
    pub fn new(journal: &'j Journal) -> Self {
        Self {
            pump: SimWaterPump::new(journal),
            engine: SimEngine::new(journal),
            filter: SimDirtFilter::new(journal, CLEAN_FILTER_CAPACITY),
            door: SimDoor::new(journal, true),
        }
    }

    /// Controller borrowing this rig's devices
    pub fn washer(&mut self) -> SimWasher<'_, 'j> {
        DishWasher::new(
            &mut self.pump,
            &mut self.engine,
            &mut self.filter,
            &mut self.door,
        )
    }
}
