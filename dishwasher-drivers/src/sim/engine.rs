//! Simulated wash engine with fault injection

use dishwasher_core::config::WashingProgram;
use dishwasher_core::traits::{Engine, EngineError};

use super::journal::{Interaction, Journal};

/// Simulated wash engine
pub struct SimEngine<'j> {
    journal: &'j Journal,
    fault: Option<EngineError>,
    completed: u32,
    last_program: Option<WashingProgram>,
}

impl<'j> SimEngine<'j> {
    /// Create a new engine
    pub fn new(journal: &'j Journal) -> Self {
        Self {
            journal,
            fault: None,
            completed: 0,
            last_program: None,
        }
    }

    /// Make every program run fail with `fault`
    pub fn fail_with(&mut self, fault: EngineError) {
        self.fault = Some(fault);
    }

    /// Remove the injected fault
    pub fn repair(&mut self) {
        self.fault = None;
    }

    /// Number of programs run to completion
    pub fn completed(&self) -> u32 {
        self.completed
    }

    /// Last program that completed
    pub fn last_program(&self) -> Option<WashingProgram> {
        self.last_program
    }
}

impl Engine for SimEngine<'_> {
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError> {
        self.journal.record(Interaction::RunProgram(program));
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        self.completed += 1;
        self.last_program = Some(program);
        Ok(())
    }
}
