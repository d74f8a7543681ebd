//! Schedule performance metrics.
//!
//! Computes summary statistics from a placed job sequence.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Waiting Time | mean(start) since every job arrives at t=0 |
//! | Average Turnaround Time | mean(completion) |
//! | Throughput | jobs / makespan |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{makespan, ScheduledJob};

/// Aggregate statistics for one schedule.
///
/// Values are kept at full precision; rounding is left to the consumer.
/// Times are in minutes, throughput in jobs per minute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean time spent queued before service.
    pub average_waiting_time: f64,
    /// Mean time from submission to completion.
    pub average_turnaround_time: f64,
    /// Jobs completed per minute over the makespan.
    pub throughput: f64,
    /// Completion time of the last job.
    pub makespan: i64,
    /// Number of jobs.
    pub job_count: usize,
}

impl Metrics {
    /// Computes metrics from a schedule in sequence order.
    ///
    /// The input is trusted to be scheduler output and is not re-validated.
    /// An empty schedule yields all-zero metrics.
    pub fn calculate(jobs: &[ScheduledJob]) -> Self {
        if jobs.is_empty() {
            return Self::default();
        }

        let n = jobs.len() as f64;
        // i128 sums cannot overflow for any slice of i64 times
        let total_waiting: i128 = jobs.iter().map(|j| i128::from(j.waiting_time)).sum();
        let total_turnaround: i128 = jobs
            .iter()
            .map(|j| i128::from(j.turnaround_time()))
            .sum();
        let makespan = makespan(jobs);

        // Only reachable with unchecked zero-length jobs
        let throughput = if makespan <= 0 {
            0.0
        } else {
            n / makespan as f64
        };

        Self {
            average_waiting_time: total_waiting as f64 / n,
            average_turnaround_time: total_turnaround as f64 / n,
            throughput,
            makespan,
            job_count: jobs.len(),
        }
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg waiting {:.2}m, avg turnaround {:.2}m, throughput {:.2}/m",
            self.average_waiting_time, self.average_turnaround_time, self.throughput
        )
    }
}

/// Computes [`Metrics`] for a schedule.
pub fn aggregate(jobs: &[ScheduledJob]) -> Metrics {
    Metrics::calculate(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;

    fn placed(id: &str, minutes: i64, sequence: usize, start: i64) -> ScheduledJob {
        ScheduledJob::place(Job::new(id).with_service_time(minutes), sequence, start).unwrap()
    }

    fn sample() -> Vec<ScheduledJob> {
        vec![placed("B", 2, 1, 0), placed("C", 4, 2, 2), placed("A", 5, 3, 6)]
    }

    #[test]
    fn test_metrics_basic() {
        let m = aggregate(&sample());
        assert!((m.average_waiting_time - 8.0 / 3.0).abs() < 1e-10);
        assert!((m.average_turnaround_time - 19.0 / 3.0).abs() < 1e-10);
        assert!((m.throughput - 3.0 / 11.0).abs() < 1e-10);
        assert_eq!(m.makespan, 11);
        assert_eq!(m.job_count, 3);
    }

    #[test]
    fn test_metrics_single_job() {
        let m = aggregate(&[placed("solo", 10, 1, 0)]);
        assert!((m.average_waiting_time - 0.0).abs() < 1e-10);
        assert!((m.average_turnaround_time - 10.0).abs() < 1e-10);
        assert!((m.throughput - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = aggregate(&[]);
        assert_eq!(m.average_waiting_time, 0.0);
        assert_eq!(m.average_turnaround_time, 0.0);
        assert_eq!(m.throughput, 0.0);
        assert_eq!(m.makespan, 0);
        assert_eq!(m.job_count, 0);
        assert!(!m.throughput.is_nan());
    }

    #[test]
    fn test_metrics_zero_makespan() {
        let m = aggregate(&[placed("z", 0, 1, 0)]);
        assert_eq!(m.throughput, 0.0);
        assert!(m.average_waiting_time.is_finite());
    }

    #[test]
    fn test_metrics_near_clock_limit() {
        let half = i64::MAX / 2;
        let jobs = vec![placed("a", half, 1, 0), placed("b", half + 1, 2, half)];
        let m = aggregate(&jobs);
        assert_eq!(m.makespan, i64::MAX);
        assert!(m.average_waiting_time > 0.0);
        assert!(m.average_turnaround_time > m.average_waiting_time);
        assert!(m.throughput > 0.0);
    }

    #[test]
    fn test_display_rounds_to_two_places() {
        let m = aggregate(&sample());
        assert_eq!(
            m.to_string(),
            "avg waiting 2.67m, avg turnaround 6.33m, throughput 0.27/m"
        );
    }
}
