//! Simulated door latch

use dishwasher_core::traits::Door;

use super::journal::{Interaction, Journal};

/// Simulated door with switch and lock solenoid
pub struct SimDoor<'j> {
    journal: &'j Journal,
    closed: bool,
    locked: bool,
    lock_cycles: u32,
}

impl<'j> SimDoor<'j> {
    /// Create a new door, unlocked
    pub fn new(journal: &'j Journal, closed: bool) -> Self {
        Self {
            journal,
            closed,
            locked: false,
            lock_cycles: 0,
        }
    }

    /// Open or close the door
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    /// Check if the lock is engaged
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Number of times the lock has been engaged
    pub fn lock_cycles(&self) -> u32 {
        self.lock_cycles
    }
}

impl Door for SimDoor<'_> {
    fn closed(&mut self) -> bool {
        self.journal.record(Interaction::DoorClosed);
        self.closed
    }

    fn lock(&mut self) {
        self.journal.record(Interaction::DoorLock);
        self.locked = true;
        self.lock_cycles += 1;
    }

    fn unlock(&mut self) {
        self.journal.record(Interaction::DoorUnlock);
        self.locked = false;
    }
}
