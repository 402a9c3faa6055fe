//! Configuration slot
//!
//! Keeps the last used program configuration as postcard binary data in a
//! fixed-size buffer, the way a board would keep it in a flash sector.

use dishwasher_core::config::{ConfigError, ProgramConfiguration};

/// Slot size in bytes
pub const SLOT_SIZE: usize = 64;

/// Fixed-size storage for one encoded configuration
#[derive(Debug, Clone)]
pub struct ConfigSlot {
    buf: [u8; SLOT_SIZE],
    len: usize,
}

impl Default for ConfigSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSlot {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            buf: [0; SLOT_SIZE],
            len: 0,
        }
    }

    /// Replace the stored configuration
    ///
    /// The slot is left empty if encoding fails.
    pub fn store(&mut self, config: &ProgramConfiguration) -> Result<(), ConfigError> {
        self.len = 0;
        let used = config.encode(&mut self.buf)?.len();
        self.len = used;
        Ok(())
    }

    /// Load the stored configuration, if any
    pub fn load(&self) -> Result<Option<ProgramConfiguration>, ConfigError> {
        if self.is_empty() {
            return Ok(None);
        }
        ProgramConfiguration::decode(&self.buf[..self.len]).map(Some)
    }

    /// Erase the slot
    pub fn clear(&mut self) {
        self.buf = [0; SLOT_SIZE];
        self.len = 0;
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw stored bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dishwasher_core::config::{FillLevel, WashingProgram};

    fn eco_half() -> ProgramConfiguration {
        ProgramConfiguration::builder()
            .with_program(WashingProgram::Eco)
            .with_fill_level(FillLevel::Half)
            .with_tablets_used(false)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_slot() {
        let slot = ConfigSlot::new();
        assert!(slot.is_empty());
        assert_eq!(slot.load(), Ok(None));
    }

    #[test]
    fn test_store_and_load() {
        let mut slot = ConfigSlot::new();
        slot.store(&eco_half()).unwrap();

        assert!(!slot.is_empty());
        assert_eq!(slot.load(), Ok(Some(eco_half())));
    }

    #[test]
    fn test_store_replaces_previous() {
        let mut slot = ConfigSlot::new();
        slot.store(&eco_half()).unwrap();

        let night = ProgramConfiguration::builder()
            .with_program(WashingProgram::Night)
            .with_fill_level(FillLevel::Full)
            .with_tablets_used(true)
            .build()
            .unwrap();
        slot.store(&night).unwrap();

        assert_eq!(slot.load(), Ok(Some(night)));
    }

    #[test]
    fn test_clear() {
        let mut slot = ConfigSlot::new();
        slot.store(&eco_half()).unwrap();
        slot.clear();
        assert!(slot.as_bytes().is_empty());
        assert_eq!(slot.load(), Ok(None));
    }
}
