//! Everything a renderer needs from one scheduling run.

use serde::{Deserialize, Serialize};

use super::{layout, Metrics, SjfScheduler, TimelineSegment};
use crate::error::ScheduleError;
use crate::models::{find_scheduled, Job, ScheduledJob};

/// Plan, metrics, and timeline for one job set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Jobs in execution order.
    pub jobs: Vec<ScheduledJob>,
    /// Summary statistics.
    pub metrics: Metrics,
    /// Timeline bars, one per job.
    pub timeline: Vec<TimelineSegment>,
}

impl ScheduleReport {
    /// Schedules `jobs` with default settings and derives metrics and layout.
    ///
    /// # Example
    ///
    /// ```
    /// use sjf_kitchen::models::{Menu, Selection};
    /// use sjf_kitchen::scheduler::ScheduleReport;
    ///
    /// let menu = Menu::restaurant();
    /// let mut selection = Selection::new();
    /// selection.toggle_from(&menu, "7").unwrap(); // Biriyani, 25m
    /// selection.toggle_from(&menu, "1").unwrap(); // Tea, 2m
    ///
    /// let report = ScheduleReport::build(&selection.snapshot()).unwrap();
    /// assert_eq!(report.jobs[0].job.name, "Tea");
    /// assert_eq!(report.metrics.makespan, 27);
    /// ```
    pub fn build(jobs: &[Job]) -> Result<Self, ScheduleError> {
        Self::build_with(&SjfScheduler::new(), jobs)
    }

    /// Like [`ScheduleReport::build`] with a configured scheduler.
    pub fn build_with(scheduler: &SjfScheduler, jobs: &[Job]) -> Result<Self, ScheduleError> {
        let jobs = scheduler.schedule(jobs)?;
        Ok(Self::from_schedule(jobs))
    }

    /// Derives metrics and layout from an existing schedule.
    pub fn from_schedule(jobs: Vec<ScheduledJob>) -> Self {
        let metrics = Metrics::calculate(&jobs);
        let timeline = layout(&jobs);
        Self {
            jobs,
            metrics,
            timeline,
        }
    }

    /// The placed record for a job ID, if it was scheduled.
    pub fn find(&self, id: &str) -> Option<&ScheduledJob> {
        find_scheduled(&self.jobs, id)
    }

    /// Whether the report covers no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
