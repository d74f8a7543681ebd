//! Proportional timeline (Gantt) layout.

use serde::{Deserialize, Serialize};

use crate::models::{makespan, ScheduledJob};

/// One bar on the timeline, as fractions of the makespan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Job identifier.
    pub id: String,
    /// Bar start: `start_time / makespan`, in `[0, 1]`.
    pub offset_fraction: f64,
    /// Bar length: `service_time / makespan`, in `[0, 1]`.
    pub width_fraction: f64,
}

/// Lays out a schedule as timeline segments, one per job in sequence order.
///
/// A schedule with no positive makespan (in practice, an empty one) yields no
/// segments, so no fraction ever divides by zero. Fractions are clamped to
/// `[0, 1]`; this only changes values for unchecked plans with negative
/// service times.
pub fn layout(jobs: &[ScheduledJob]) -> Vec<TimelineSegment> {
    let span = makespan(jobs);
    if span <= 0 {
        return Vec::new();
    }
    let span = span as f64;

    jobs.iter()
        .map(|j| TimelineSegment {
            id: j.id().to_string(),
            offset_fraction: (j.start_time as f64 / span).clamp(0.0, 1.0),
            width_fraction: (j.service_time() as f64 / span).clamp(0.0, 1.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;

    fn placed(id: &str, minutes: i64, sequence: usize, start: i64) -> ScheduledJob {
        ScheduledJob::place(Job::new(id).with_service_time(minutes), sequence, start).unwrap()
    }

    #[test]
    fn test_layout_fractions() {
        let jobs = vec![placed("B", 2, 1, 0), placed("C", 4, 2, 2), placed("A", 5, 3, 6)];
        let segments = layout(&jobs);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].id, "B");
        assert!((segments[0].offset_fraction - 0.0).abs() < 1e-10);
        assert!((segments[0].width_fraction - 2.0 / 11.0).abs() < 1e-10);
        assert!((segments[2].offset_fraction - 6.0 / 11.0).abs() < 1e-10);
        assert!((segments[2].width_fraction - 5.0 / 11.0).abs() < 1e-10);

        // Last bar ends exactly at the right edge
        let last = &segments[2];
        assert!((last.offset_fraction + last.width_fraction - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_layout_widths_sum_to_one() {
        let jobs = vec![placed("X", 3, 1, 0), placed("Y", 3, 2, 3), placed("Z", 7, 3, 6)];
        let total: f64 = layout(&jobs).iter().map(|s| s.width_fraction).sum();
        assert!((total - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_layout_single_job_fills_timeline() {
        let segments = layout(&[placed("solo", 10, 1, 0)]);
        assert_eq!(segments.len(), 1);
        assert!((segments[0].width_fraction - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_layout_empty() {
        assert!(layout(&[]).is_empty());
    }

    #[test]
    fn test_layout_negative_service_time_stays_in_range() {
        // Unchecked plan: -5 runs first, clock goes back to -5, then 10 ends at 5
        let jobs = vec![placed("neg", -5, 1, 0), placed("pos", 10, 2, -5)];
        let segments = layout(&jobs);

        assert_eq!(segments.len(), 2);
        for s in &segments {
            assert!((0.0..=1.0).contains(&s.offset_fraction));
            assert!((0.0..=1.0).contains(&s.width_fraction));
        }
        assert_eq!(segments[0].width_fraction, 0.0);
        assert_eq!(segments[1].offset_fraction, 0.0);
        assert_eq!(segments[1].width_fraction, 1.0);
    }

    #[test]
    fn test_layout_zero_makespan() {
        assert!(layout(&[placed("z", 0, 1, 0)]).is_empty());
    }
}
