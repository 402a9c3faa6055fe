//! Wash engine trait

use crate::config::WashingProgram;

/// Errors that can occur while running a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// Spray arm motor overloaded
    Overload,
    /// Spray arm motor stalled
    Stalled,
    /// Water heater fault
    HeaterFault,
}

/// Trait for the wash engine
///
/// Runs a complete program (spray, heat, dry). Blocks until the program
/// finishes or faults.
pub trait Engine {
    /// Run the given program to completion
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError>;
}

impl<T: Engine + ?Sized> Engine for &mut T {
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError> {
        T::run_program(self, program)
    }
}
