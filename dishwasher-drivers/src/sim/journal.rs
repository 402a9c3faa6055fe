//! Interaction journal
//!
//! Shared by the simulated devices so the exact order of capability calls
//! across all four devices can be inspected after a run.

use core::cell::{Cell, RefCell};

use dishwasher_core::config::{FillLevel, WashingProgram};
use heapless::Vec;

/// Maximum recorded interactions
pub const JOURNAL_CAPACITY: usize = 32;

/// A single capability call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interaction {
    /// Door switch read
    DoorClosed,
    /// Door lock engaged
    DoorLock,
    /// Door lock released
    DoorUnlock,
    /// Filter sensor read
    FilterCapacity,
    /// Pump fill requested
    Pour(FillLevel),
    /// Engine program requested
    RunProgram(WashingProgram),
    /// Pump drain requested
    Drain,
}

/// Ordered record of simulated capability calls
///
/// Entries past [`JOURNAL_CAPACITY`] are dropped and counted.
#[derive(Debug, Default)]
pub struct Journal {
    entries: RefCell<Vec<Interaction, JOURNAL_CAPACITY>>,
    overflowed: Cell<usize>,
}

impl Journal {
    /// Create an empty journal
    pub const fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            overflowed: Cell::new(0),
        }
    }

    /// Append an interaction
    pub fn record(&self, interaction: Interaction) {
        if self.entries.borrow_mut().push(interaction).is_err() {
            self.overflowed.set(self.overflowed.get() + 1);
        }
    }

    /// Copy of the recorded interactions, oldest first
    pub fn entries(&self) -> Vec<Interaction, JOURNAL_CAPACITY> {
        self.entries.borrow().clone()
    }

    /// Most recent interaction
    pub fn last(&self) -> Option<Interaction> {
        self.entries.borrow().last().copied()
    }

    /// Number of times `interaction` was recorded
    pub fn count(&self, interaction: Interaction) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|&&i| i == interaction)
            .count()
    }

    /// Number of recorded interactions
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Check if further interactions will be dropped
    pub fn is_full(&self) -> bool {
        self.entries.borrow().is_full()
    }

    /// Number of interactions dropped because the journal was full
    pub fn overflowed(&self) -> usize {
        self.overflowed.get()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
        self.overflowed.set(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let journal = Journal::new();
        journal.record(Interaction::DoorClosed);
        journal.record(Interaction::FilterCapacity);

        assert_eq!(
            journal.entries().as_slice(),
            &[Interaction::DoorClosed, Interaction::FilterCapacity]
        );
        assert_eq!(journal.last(), Some(Interaction::FilterCapacity));
    }

    #[test]
    fn test_overflow_is_counted() {
        let journal = Journal::new();
        for _ in 0..JOURNAL_CAPACITY + 3 {
            journal.record(Interaction::Drain);
        }

        assert!(journal.is_full());
        assert_eq!(journal.len(), JOURNAL_CAPACITY);
        assert_eq!(journal.overflowed(), 3);
    }

    #[test]
    fn test_clear() {
        let journal = Journal::new();
        journal.record(Interaction::DoorLock);
        journal.record(Interaction::DoorLock);
        assert_eq!(journal.count(Interaction::DoorLock), 2);

        journal.clear();
        assert!(journal.is_empty());
        assert_eq!(journal.overflowed(), 0);
        assert_eq!(journal.last(), None);
    }
}
