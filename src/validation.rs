//! Input validation for job sets.
//!
//! Checks a job snapshot before scheduling. Detects:
//! - Non-positive service times
//! - Duplicate IDs
//!
//! All problems are collected in input order rather than stopping at the
//! first, so a caller can report everything wrong with a selection at once.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A problem with one job in the input set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A job has a zero or negative service time.
    #[error("job '{id}' has non-positive service time {service_time}")]
    InvalidServiceTime { id: String, service_time: i64 },
    /// Two jobs share the same ID.
    #[error("duplicate job ID '{id}'")]
    DuplicateId { id: String },
}

impl ValidationError {
    /// ID of the offending job.
    pub fn job_id(&self) -> &str {
        match self {
            Self::InvalidServiceTime { id, .. } | Self::DuplicateId { id } => id,
        }
    }
}

/// Validates a job set for scheduling.
///
/// Checks:
/// 1. Every `service_time` is positive
/// 2. No two jobs share an ID (each repeated occurrence is reported once)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for job in jobs {
        if job.service_time <= 0 {
            errors.push(ValidationError::InvalidServiceTime {
                id: job.id.clone(),
                service_time: job.service_time,
            });
        }

        if !ids.insert(job.id.as_str()) {
            errors.push(ValidationError::DuplicateId { id: job.id.clone() });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
