//! Simulated water pump with fault injection

use dishwasher_core::config::FillLevel;
use dishwasher_core::traits::{PumpError, WaterPump};

use super::journal::{Interaction, Journal};

/// Simulated water pump
///
/// Calls are journaled even when an injected fault makes them fail.
pub struct SimWaterPump<'j> {
    journal: &'j Journal,
    pour_fault: Option<PumpError>,
    drain_fault: Option<PumpError>,
    water: Option<FillLevel>,
}

impl<'j> SimWaterPump<'j> {
    /// Create a new pump with an empty tub
    pub fn new(journal: &'j Journal) -> Self {
        Self {
            journal,
            pour_fault: None,
            drain_fault: None,
            water: None,
        }
    }

    /// Make every pour fail with `fault`
    pub fn fail_pour_with(&mut self, fault: PumpError) {
        self.pour_fault = Some(fault);
    }

    /// Make every drain fail with `fault`
    pub fn fail_drain_with(&mut self, fault: PumpError) {
        self.drain_fault = Some(fault);
    }

    /// Remove all injected faults
    pub fn repair(&mut self) {
        self.pour_fault = None;
        self.drain_fault = None;
    }

    /// Level of water currently in the tub
    pub fn water_level(&self) -> Option<FillLevel> {
        self.water
    }

    /// Check if the tub holds water
    pub fn has_water(&self) -> bool {
        self.water.is_some()
    }
}

impl WaterPump for SimWaterPump<'_> {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        self.journal.record(Interaction::Pour(level));
        if let Some(fault) = self.pour_fault {
            return Err(fault);
        }
        self.water = Some(level);
        Ok(())
    }

    fn drain(&mut self) -> Result<(), PumpError> {
        self.journal.record(Interaction::Drain);
        if let Some(fault) = self.drain_fault {
            return Err(fault);
        }
        self.water = None;
        Ok(())
    }
}
