//! Job (order) model.
//!
//! A job is a single unit of work queued for the one server (the kitchen).
//! Only `service_time` influences scheduling; `name` and `category` are
//! carried through for display.

use serde::{Deserialize, Serialize};

/// A job to be scheduled.
///
/// # Time Representation
/// Service time is in whole minutes; fractional durations such as 2.5
/// minutes are not representable and fail to deserialize. All jobs are
/// assumed to be queued at t=0, so there is no release time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier (used for selection, never for ordering).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Grouping label (e.g., "Hot Drinks").
    pub category: String,
    /// Burst time in minutes. Must be positive to be schedulable.
    pub service_time: i64,
}

impl Job {
    /// Creates a new job with the given ID and zero service time.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            category: String::new(),
            service_time: 0,
        }
    }

    /// Sets the job name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the job category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the service time (minutes).
    pub fn with_service_time(mut self, minutes: i64) -> Self {
        self.service_time = minutes;
        self
    }
}
