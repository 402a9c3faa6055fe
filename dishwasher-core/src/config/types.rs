//! Run configuration
//!
//! A [`ProgramConfiguration`] is built once per run through
//! [`ProgramConfigurationBuilder`] and never changes afterwards.

use super::program::{FillLevel, WashingProgram};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur when building a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuildError {
    /// No washing program was chosen
    MissingProgram,
    /// No fill level was chosen
    MissingFillLevel,
    /// Tablet usage was not specified
    MissingTabletsUsed,
}

/// Configuration for a single wash run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramConfiguration {
    program: WashingProgram,
    fill_level: FillLevel,
    /// Not consulted by the controller yet
    tablets_used: bool,
}

impl ProgramConfiguration {
    /// Start building a configuration
    pub const fn builder() -> ProgramConfigurationBuilder {
        ProgramConfigurationBuilder::new()
    }

    /// Selected washing program
    pub const fn program(&self) -> WashingProgram {
        self.program
    }

    /// Selected fill level
    pub const fn fill_level(&self) -> FillLevel {
        self.fill_level
    }

    /// Whether detergent tablets are loaded
    pub const fn tablets_used(&self) -> bool {
        self.tablets_used
    }
}

/// Builder for [`ProgramConfiguration`]
///
/// All three fields are required; [`build`](Self::build) reports the first
/// one that is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramConfigurationBuilder {
    program: Option<WashingProgram>,
    fill_level: Option<FillLevel>,
    tablets_used: Option<bool>,
}

impl ProgramConfigurationBuilder {
    /// Create an empty builder
    pub const fn new() -> Self {
        Self {
            program: None,
            fill_level: None,
            tablets_used: None,
        }
    }

    /// Set the washing program
    pub const fn with_program(mut self, program: WashingProgram) -> Self {
        self.program = Some(program);
        self
    }

    /// Set the fill level
    pub const fn with_fill_level(mut self, fill_level: FillLevel) -> Self {
        self.fill_level = Some(fill_level);
        self
    }

    /// Set whether tablets are used
    pub const fn with_tablets_used(mut self, tablets_used: bool) -> Self {
        self.tablets_used = Some(tablets_used);
        self
    }

    /// Finish the configuration
    pub fn build(self) -> Result<ProgramConfiguration, BuildError> {
        Ok(ProgramConfiguration {
            program: self.program.ok_or(BuildError::MissingProgram)?,
            fill_level: self.fill_level.ok_or(BuildError::MissingFillLevel)?,
            tablets_used: self.tablets_used.ok_or(BuildError::MissingTabletsUsed)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_complete() {
        let config = ProgramConfiguration::builder()
            .with_program(WashingProgram::Rinse)
            .with_fill_level(FillLevel::Half)
            .with_tablets_used(true)
            .build()
            .unwrap();

        assert_eq!(config.program(), WashingProgram::Rinse);
        assert_eq!(config.fill_level(), FillLevel::Half);
        assert!(config.tablets_used());
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let a = ProgramConfiguration::builder()
            .with_tablets_used(false)
            .with_fill_level(FillLevel::Full)
            .with_program(WashingProgram::Night)
            .build();
        let b = ProgramConfiguration::builder()
            .with_program(WashingProgram::Night)
            .with_fill_level(FillLevel::Full)
            .with_tablets_used(false)
            .build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_program() {
        let result = ProgramConfiguration::builder()
            .with_fill_level(FillLevel::Full)
            .with_tablets_used(true)
            .build();
        assert_eq!(result, Err(BuildError::MissingProgram));
    }

    #[test]
    fn test_missing_fill_level() {
        let result = ProgramConfiguration::builder()
            .with_program(WashingProgram::Eco)
            .with_tablets_used(true)
            .build();
        assert_eq!(result, Err(BuildError::MissingFillLevel));
    }

    #[test]
    fn test_missing_tablets() {
        let result = ProgramConfiguration::builder()
            .with_program(WashingProgram::Eco)
            .with_fill_level(FillLevel::Half)
            .build();
        assert_eq!(result, Err(BuildError::MissingTabletsUsed));
    }

    #[test]
    fn test_empty_builder_reports_program_first() {
        assert_eq!(
            ProgramConfigurationBuilder::new().build(),
            Err(BuildError::MissingProgram)
        );
    }
}
