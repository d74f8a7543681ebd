//! Scheduling domain models.
//!
//! Input jobs, their placed counterparts, and the caller-side menu and
//! selection state that assembles job sets.
//!
//! # Domain Mappings
//!
//! | sjf-kitchen | Restaurant | CPU scheduling |
//! |-------------|------------|----------------|
//! | Job | Order item | Process |
//! | service_time | Preparation time | Burst time |
//! | ScheduledJob | Ticket on the pass | Dispatch record |
//! | Selection | Current order | Ready queue |

mod job;
mod menu;
mod schedule;

pub use job::Job;
pub use menu::{Menu, Selection, SelectionError};
pub use schedule::{find_scheduled, makespan, ScheduledJob};
