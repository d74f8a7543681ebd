//! SJF scheduling, metrics, and timeline layout.
//!
//! Three pure stages, called explicitly by the caller whenever its job
//! set changes:
//!
//! 1. [`schedule`]: job set → ordered, timestamped plan
//! 2. [`aggregate`]: plan → [`Metrics`]
//! 3. [`layout`]: plan → [`TimelineSegment`]s
//!
//! [`ScheduleReport`] runs all three in one call.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod metrics;
mod report;
mod sjf;
mod timeline;

pub use metrics::{aggregate, Metrics};
pub use report::ScheduleReport;
pub use sjf::{schedule, SchedulerConfig, SjfScheduler, TieBreaker, ValidationPolicy};
pub use timeline::{layout, TimelineSegment};
