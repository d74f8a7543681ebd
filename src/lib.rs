//! Shortest-Job-First order scheduling for a single kitchen.
//!
//! Turns a set of orders with known preparation times into a deterministic,
//! non-preemptive execution plan, and derives performance metrics and a
//! proportional timeline from it.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `ScheduledJob`, `Menu`, `Selection`
//! - **`validation`**: Input integrity checks (non-positive times, duplicate IDs)
//! - **`scheduler`**: `schedule`, `aggregate`, `layout`, and `ScheduleReport`
//!
//! # Architecture
//!
//! Every scheduling entry point is a pure function of its input. The caller
//! owns the mutable selection and passes an immutable snapshot per run;
//! nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use sjf_kitchen::{aggregate, layout, schedule, models::Job};
//!
//! let jobs = vec![
//!     Job::new("A").with_service_time(5),
//!     Job::new("B").with_service_time(2),
//!     Job::new("C").with_service_time(4),
//! ];
//! let plan = schedule(&jobs)?;
//! let metrics = aggregate(&plan);
//! assert_eq!(metrics.makespan, 11);
//! assert_eq!(format!("{:.2}", metrics.average_waiting_time), "2.67");
//! assert_eq!(layout(&plan).len(), 3);
//! # Ok::<(), sjf_kitchen::ScheduleError>(())
//! ```
//!
//! # References
//!
//! - Smith (1956), "Various Optimizers for Single-Stage Production"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
pub use scheduler::{aggregate, layout, schedule};
