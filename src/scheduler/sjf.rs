//! Non-preemptive Shortest-Job-First scheduler.
//!
//! # Algorithm
//!
//! 1. Validate the job set (unless configured otherwise).
//! 2. Stable-sort jobs by service time, ascending.
//! 3. Walk the sorted jobs once with a running clock starting at 0:
//!    each job starts when the previous one completes.
//!
//! # Complexity
//! O(n log n) for n jobs (the sort dominates).
//!
//! # Reference
//! Smith (1956): SPT sequencing minimizes mean flow time on a single machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ScheduleError;
use crate::models::{makespan, Job, ScheduledJob};
use crate::validation::validate_jobs;

/// How input jobs are checked before scheduling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Reject job sets with non-positive service times or duplicate IDs.
    #[default]
    Reject,
    /// Schedule whatever is given, as-is.
    ///
    /// Negative service times make the clock run backwards; timeline
    /// fractions for such plans are clamped to `[0, 1]`.
    Unchecked,
}

/// How jobs with equal service time are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    /// Keep relative input order (stable sort).
    #[default]
    InputOrder,
    /// Lexicographic by job ID.
    ById,
}

/// Scheduler settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Input checking policy.
    pub validation: ValidationPolicy,
    /// Ordering among equal service times.
    pub tie_breaker: TieBreaker,
}

/// Shortest-Job-First scheduler for a single server.
///
/// Pure: holds only configuration, so the same input always yields the
/// same output.
///
/// # Example
///
/// ```
/// use sjf_kitchen::models::Job;
/// use sjf_kitchen::scheduler::{SjfScheduler, TieBreaker};
///
/// let jobs = vec![
///     Job::new("Y").with_service_time(3),
///     Job::new("X").with_service_time(3),
/// ];
/// let scheduler = SjfScheduler::new().with_tie_breaker(TieBreaker::ById);
/// let plan = scheduler.schedule(&jobs).unwrap();
/// assert_eq!(plan[0].id(), "X");
/// assert_eq!(plan[1].start_time, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SjfScheduler {
    config: SchedulerConfig,
}

impl SjfScheduler {
    /// Creates a scheduler with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all settings.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the validation policy.
    pub fn with_validation(mut self, validation: ValidationPolicy) -> Self {
        self.config.validation = validation;
        self
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.config.tie_breaker = tie_breaker;
        self
    }

    /// Current settings.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Produces the SJF execution plan for `jobs`.
    ///
    /// Empty input yields an empty plan. Under [`ValidationPolicy::Reject`]
    /// an invalid job set is rejected as a whole. A job set whose total
    /// service time does not fit the clock is rejected as
    /// [`ScheduleError::ClockOverflow`].
    pub fn schedule(&self, jobs: &[Job]) -> Result<Vec<ScheduledJob>, ScheduleError> {
        if self.config.validation == ValidationPolicy::Reject {
            if let Err(errors) = validate_jobs(jobs) {
                debug!(jobs = jobs.len(), errors = errors.len(), "rejected job set");
                return Err(errors.into());
            }
        }

        let mut sorted = jobs.to_vec();
        match self.config.tie_breaker {
            // sort_by is stable: equal service times keep input order
            TieBreaker::InputOrder => sorted.sort_by(|a, b| a.service_time.cmp(&b.service_time)),
            TieBreaker::ById => sorted.sort_by(|a, b| {
                a.service_time
                    .cmp(&b.service_time)
                    .then_with(|| a.id.cmp(&b.id))
            }),
        }

        let mut current_time: i64 = 0;
        let mut plan = Vec::with_capacity(sorted.len());
        for (idx, job) in sorted.into_iter().enumerate() {
            let id = job.id.clone();
            let placed = ScheduledJob::place(job, idx + 1, current_time).ok_or_else(|| {
                debug!(id = %id, start = current_time, "clock overflow");
                ScheduleError::ClockOverflow { id }
            })?;
            trace!(
                id = placed.id(),
                sequence = placed.sequence,
                start = placed.start_time,
                end = placed.completion_time,
                "placed job"
            );
            current_time = placed.completion_time;
            plan.push(placed);
        }

        debug!(jobs = plan.len(), makespan = makespan(&plan), "scheduled job set");
        Ok(plan)
    }
}

/// Schedules `jobs` with the default settings.
///
/// # Example
///
/// ```
/// use sjf_kitchen::{schedule, models::Job};
///
/// let jobs = vec![
///     Job::new("A").with_service_time(5),
///     Job::new("B").with_service_time(2),
///     Job::new("C").with_service_time(4),
/// ];
/// let plan = schedule(&jobs).unwrap();
/// let order: Vec<&str> = plan.iter().map(|j| j.id()).collect();
/// assert_eq!(order, vec!["B", "C", "A"]);
/// ```
pub fn schedule(jobs: &[Job]) -> Result<Vec<ScheduledJob>, ScheduleError> {
    SjfScheduler::new().schedule(jobs)
}
