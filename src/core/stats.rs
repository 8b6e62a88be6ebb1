use crate::models::monthly_stats::MonthlyStats;
use crate::models::work_record::WorkRecord;
use crate::utils::date::{month_bounds, month_key, week_bounds};
use chrono::NaiveDate;

/// Totals for the month containing `reference`, plus the minutes of `reference`'s week.
///
/// `records` may span any period; only the relevant days are counted. Days
/// with zero worked minutes do not count as working days.
pub fn monthly_stats(records: &[WorkRecord], reference: NaiveDate) -> MonthlyStats {
    let (first, last) = month_bounds(reference);
    let in_month: Vec<&WorkRecord> = records
        .iter()
        .filter(|r| r.date >= first && r.date <= last)
        .collect();

    let total_minutes: i64 = in_month.iter().map(|r| r.total_work_minutes).sum();
    let total_earnings: i64 = in_month.iter().map(|r| r.earnings).sum();
    let working_days = in_month.iter().filter(|r| r.total_work_minutes > 0).count();

    let total_hours = total_minutes as f64 / 60.0;
    let average_hours_per_day = if working_days > 0 {
        total_hours / working_days as f64
    } else {
        0.0
    };

    MonthlyStats {
        month: month_key(reference),
        total_minutes,
        total_hours,
        total_earnings,
        working_days,
        average_hours_per_day,
        weekly_minutes: weekly_minutes(records, reference),
    }
}

/// Worked minutes in the Monday-to-Sunday week containing `reference`.
pub fn weekly_minutes(records: &[WorkRecord], reference: NaiveDate) -> i64 {
    let (monday, sunday) = week_bounds(reference);
    records
        .iter()
        .filter(|r| r.date >= monday && r.date <= sunday)
        .map(|r| r.total_work_minutes)
        .sum()
}
