use crate::models::work_record::Timestamp;

/// Whole minutes from `start` to `end`, rounded down. Negative when `end` precedes `start`.
pub fn floor_minutes(start: Timestamp, end: Timestamp) -> i64 {
    (end - start).num_seconds().div_euclid(60)
}

/// Length of one break window.
///
/// With both ends present the result is the elapsed whole minutes, clamped at zero.
/// If either end is missing nothing can be measured and `accumulated` comes back unchanged.
pub fn compute_break_minutes(
    break_start: Option<Timestamp>,
    break_end: Option<Timestamp>,
    accumulated: i64,
) -> i64 {
    match (break_start, break_end) {
        (Some(start), Some(end)) => floor_minutes(start, end).max(0),
        _ => accumulated,
    }
}
