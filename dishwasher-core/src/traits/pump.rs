//! Water pump trait

use crate::config::FillLevel;

/// Errors that can occur with pump operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PumpError {
    /// Inlet or outlet is blocked
    Blocked,
    /// Pump running without water
    DryRun,
    /// Leak sensor triggered
    Leak,
}

/// Trait for the water pump
///
/// Fills the tub before a program runs and empties it afterwards.
pub trait WaterPump {
    /// Fill the tub to the given level
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError>;

    /// Empty the tub
    fn drain(&mut self) -> Result<(), PumpError>;
}

impl<T: WaterPump + ?Sized> WaterPump for &mut T {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        T::pour(self, level)
    }

    fn drain(&mut self) -> Result<(), PumpError> {
        T::drain(self)
    }
}
