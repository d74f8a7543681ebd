//! Scheduled job (solution) model.
//!
//! A scheduled job is a job together with its slot in the single-server
//! execution order. Records are produced once per scheduling run and never
//! mutated afterwards; rescheduling a changed job set builds new records.

use serde::{Deserialize, Serialize};

use super::Job;

/// A job placed on the execution timeline.
///
/// For a sequence produced by the scheduler, ordered by `sequence`:
/// - `start_time[0] == 0`
/// - `start_time[i] == completion_time[i - 1]`
/// - `completion_time[i] - start_time[i] == service_time[i]`
///
/// On the wire the job fields are flattened next to the timing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJob {
    /// The scheduled job.
    #[serde(flatten)]
    pub job: Job,
    /// 1-based position in the execution order.
    pub sequence: usize,
    /// Clock time at which service begins (minutes).
    pub start_time: i64,
    /// Clock time at which service ends (minutes).
    pub completion_time: i64,
    /// Time spent queued before service (minutes).
    pub waiting_time: i64,
}

impl ScheduledJob {
    /// Places `job` at `start_time` as the `sequence`-th job.
    ///
    /// Every job arrives at t=0, so waiting time equals start time.
    /// Returns `None` if the completion time does not fit in an `i64`.
    pub fn place(job: Job, sequence: usize, start_time: i64) -> Option<Self> {
        let completion_time = start_time.checked_add(job.service_time)?;
        Some(Self {
            job,
            sequence,
            start_time,
            completion_time,
            waiting_time: start_time,
        })
    }

    /// Job identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.job.id
    }

    /// Service (burst) time in minutes.
    #[inline]
    pub fn service_time(&self) -> i64 {
        self.job.service_time
    }

    /// Turnaround time: submission (t=0) to completion.
    #[inline]
    pub fn turnaround_time(&self) -> i64 {
        self.completion_time
    }
}

/// Makespan: completion time of the last job in sequence order.
///
/// Relies on completion times being non-decreasing in sequence order,
/// which the scheduler guarantees. Returns 0 for an empty schedule.
pub fn makespan(jobs: &[ScheduledJob]) -> i64 {
    jobs.last().map(|j| j.completion_time).unwrap_or(0)
}

/// Finds the scheduled record for a job ID.
pub fn find_scheduled<'a>(jobs: &'a [ScheduledJob], id: &str) -> Option<&'a ScheduledJob> {
    jobs.iter().find(|j| j.id() == id)
}
