//! Simulated dirt filter sensor

use dishwasher_core::traits::DirtFilter;

use super::journal::{Interaction, Journal};

/// Simulated filter with a settable capacity reading
pub struct SimDirtFilter<'j> {
    journal: &'j Journal,
    capacity: f64,
}

impl<'j> SimDirtFilter<'j> {
    /// Create a new filter sensor
    pub fn new(journal: &'j Journal, capacity: f64) -> Self {
        Self { journal, capacity }
    }

    /// Change the capacity the sensor reports
    pub fn set_capacity(&mut self, capacity: f64) {
        self.capacity = capacity;
    }

    /// Current reading without recording a sensor access
    pub fn reading(&self) -> f64 {
        self.capacity
    }
}

impl DirtFilter for SimDirtFilter<'_> {
    fn capacity(&mut self) -> f64 {
        self.journal.record(Interaction::FilterCapacity);
        self.capacity
    }
}
