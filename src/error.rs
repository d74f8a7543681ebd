//! Scheduler error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by a scheduling run.
///
/// A rejected run never yields a partial schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The job set failed validation.
    #[error("invalid job set ({} problem(s)): {}", .0.len(), join(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Placing the job would push the clock past `i64::MAX` minutes.
    #[error("clock overflow placing job '{id}'")]
    ClockOverflow { id: String },
}

impl ScheduleError {
    /// The validation problems behind this error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::ClockOverflow { .. } => &[],
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
