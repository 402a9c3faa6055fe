//! Dishwasher run controller
//!
//! One call to [`DishWasher::start`] performs one complete run:
//!
//! 1. Check the door is closed
//! 2. Check the dirt filter has capacity left
//! 3. Lock the door
//! 4. Pour water at the configured fill level
//! 5. Run the configured program
//! 6. Drain
//! 7. Unlock the door
//!
//! Precondition failures return before the door is locked. A pump or engine
//! fault skips the rest of the wash but the door is still unlocked.

use crate::config::ProgramConfiguration;
use crate::traits::{DirtFilter, Door, Engine, WaterPump};

use super::result::{RunResult, Status, WashFault};

/// Filter capacity at or below which a run is refused
pub const MAXIMAL_FILTER_CAPACITY: f64 = 50.0;

/// Check whether a filter reading requires servicing
///
/// The threshold itself counts as dirty, and so does a NaN reading.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn filter_needs_service(capacity: f64) -> bool {
    !(capacity > MAXIMAL_FILTER_CAPACITY)
}

/// Dishwasher run controller
///
/// Holds the four hardware capabilities for its lifetime. Pass `&mut`
/// references to keep ownership with the hardware layer.
pub struct DishWasher<P, E, F, D> {
    pump: P,
    engine: E,
    filter: F,
    door: D,
}

impl<P, E, F, D> DishWasher<P, E, F, D>
where
    P: WaterPump,
    E: Engine,
    F: DirtFilter,
    D: Door,
{
    /// Create a new controller
    pub fn new(pump: P, engine: E, filter: F, door: D) -> Self {
        Self {
            pump,
            engine,
            filter,
            door,
        }
    }

    /// Run one wash cycle
    ///
    /// Never fails; every fault is reported through the result status.
    pub fn start(&mut self, config: ProgramConfiguration) -> RunResult {
        let program = config.program();
        info!(
            "run start: program={} fill={} tablets={}",
            program,
            config.fill_level(),
            config.tablets_used()
        );

        if !self.door.closed() {
            warn!("door open, run refused");
            return RunResult::failure(Status::DoorOpen);
        }

        let capacity = self.filter.capacity();
        if filter_needs_service(capacity) {
            warn!(
                "filter capacity {} <= {}, run refused",
                capacity, MAXIMAL_FILTER_CAPACITY
            );
            return RunResult::failure(Status::ErrorFilter);
        }

        self.door.lock();
        let washed = self.wash(&config);
        self.door.unlock();

        match washed {
            Ok(()) => {
                info!("run complete: {} min", program.time_in_minutes());
                RunResult::success(program)
            }
            Err(fault) => {
                warn!("run aborted: {}", fault);
                fault.into()
            }
        }
    }

    /// Fill, run and drain; stops at the first fault
    fn wash(&mut self, config: &ProgramConfiguration) -> Result<(), WashFault> {
        debug!("pour {}", config.fill_level());
        self.pump.pour(config.fill_level())?;

        debug!("run {}", config.program());
        self.engine.run_program(config.program())?;

        debug!("drain");
        self.pump.drain()?;

        Ok(())
    }
}

impl<P, E, F, D> DishWasher<P, E, F, D> {
    /// Get access to the water pump
    pub fn pump(&self) -> &P {
        &self.pump
    }

    /// Get access to the engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get access to the dirt filter
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Get access to the door
    pub fn door(&self) -> &D {
        &self.door
    }

    /// Hand the capabilities back as `(pump, engine, filter, door)`
    pub fn release(self) -> (P, E, F, D) {
        (self.pump, self.engine, self.filter, self.door)
    }
}
