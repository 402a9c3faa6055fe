//! Run outcome types

use crate::config::WashingProgram;
use crate::traits::{EngineError, PumpError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome classification of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Program completed
    Success,
    /// Door was open at start
    DoorOpen,
    /// Filter needs servicing
    ErrorFilter,
    /// Engine faulted while running the program
    ErrorProgram,
    /// Pump faulted while filling or draining
    ErrorPump,
}

impl Status {
    /// Check if the run completed
    pub const fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Check if the run was aborted
    pub const fn is_error(self) -> bool {
        !self.is_success()
    }
}

/// A collaborator fault raised during the wash phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WashFault {
    /// Pump failed to pour or drain
    Pump(PumpError),
    /// Engine failed to run the program
    Engine(EngineError),
}

impl WashFault {
    /// Status reported for this fault
    pub const fn status(self) -> Status {
        match self {
            WashFault::Pump(_) => Status::ErrorPump,
            WashFault::Engine(_) => Status::ErrorProgram,
        }
    }
}

impl From<PumpError> for WashFault {
    fn from(e: PumpError) -> Self {
        WashFault::Pump(e)
    }
}

impl From<EngineError> for WashFault {
    fn from(e: EngineError) -> Self {
        WashFault::Engine(e)
    }
}

impl From<WashFault> for Status {
    fn from(fault: WashFault) -> Self {
        fault.status()
    }
}

/// Result of a single run
///
/// `run_minutes` is non-zero exactly when the status is [`Status::Success`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunResult {
    status: Status,
    run_minutes: u32,
}

impl RunResult {
    /// Completed run of `program`
    pub const fn success(program: WashingProgram) -> Self {
        Self {
            status: Status::Success,
            run_minutes: program.time_in_minutes(),
        }
    }

    /// Aborted run
    ///
    /// Only called with error statuses.
    pub(crate) const fn failure(status: Status) -> Self {
        debug_assert!(status.is_error());
        Self {
            status,
            run_minutes: 0,
        }
    }

    /// Outcome classification
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Minutes the program ran, zero if aborted
    pub const fn run_minutes(&self) -> u32 {
        self.run_minutes
    }
}

impl From<WashFault> for RunResult {
    fn from(fault: WashFault) -> Self {
        RunResult::failure(fault.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_duration() {
        for program in WashingProgram::ALL {
            let result = RunResult::success(program);
            assert_eq!(result.status(), Status::Success);
            assert_eq!(result.run_minutes(), program.time_in_minutes());
        }
    }

    #[test]
    fn test_failure_has_zero_minutes() {
        let result = RunResult::failure(Status::DoorOpen);
        assert_eq!(result.status(), Status::DoorOpen);
        assert_eq!(result.run_minutes(), 0);
    }

    #[test]
    fn test_fault_mapping() {
        assert_eq!(
            Status::from(WashFault::from(PumpError::Leak)),
            Status::ErrorPump
        );
        assert_eq!(
            Status::from(WashFault::from(EngineError::Stalled)),
            Status::ErrorProgram
        );
        assert_eq!(
            RunResult::from(WashFault::Pump(PumpError::Blocked)),
            RunResult::failure(Status::ErrorPump)
        );
    }

    #[test]
    fn test_status_helpers() {
        assert!(Status::Success.is_success());
        assert!(!Status::Success.is_error());
        assert!(Status::ErrorFilter.is_error());
        assert!(Status::ErrorPump.is_error());
    }
}
