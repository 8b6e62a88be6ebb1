use super::breaks::floor_minutes;
use crate::models::work_record::Timestamp;

/// Worked = (end - clock_in) - breaks, never negative.
///
/// `end` is the clock-out stamp, or the caller's "now" while the session is still running.
pub fn compute_worked_minutes(
    clock_in: Option<Timestamp>,
    end: Timestamp,
    break_minutes: i64,
) -> i64 {
    let Some(start) = clock_in else {
        return 0;
    };

    (floor_minutes(start, end) - break_minutes).max(0)
}

pub fn is_overtime(worked_minutes: i64, target_minutes: i64) -> bool {
    worked_minutes > target_minutes
}
