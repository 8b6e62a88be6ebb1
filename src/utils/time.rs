//! Time utilities: parsing HH:MM and turning a day + time into a local timestamp.

use crate::errors::{AppError, AppResult};
use crate::models::work_record::Timestamp;
use chrono::{Local, NaiveDate, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// `date` at `time` in the local zone. Times skipped or repeated by a DST change are rejected.
pub fn local_timestamp(date: NaiveDate, time: NaiveTime) -> AppResult<Timestamp> {
    date.and_time(time)
        .and_local_timezone(Local)
        .single()
        .ok_or_else(|| {
            AppError::InvalidTimestamp(format!(
                "{} {} does not exist (or is ambiguous) in the local time zone",
                date,
                time.format("%H:%M")
            ))
        })
}

/// Parse `HH:MM` on `date`; anything else is an `InvalidTimestamp`.
pub fn parse_time_on(date: NaiveDate, input: &str) -> AppResult<Timestamp> {
    let t = parse_time(input).ok_or_else(|| {
        AppError::InvalidTimestamp(format!("'{}' is not a valid HH:MM time", input))
    })?;
    local_timestamp(date, t)
}

/// The moment a punch refers to: now, or `date`/`at` when the user back-dates it.
pub fn resolve_punch_time(date: Option<&String>, at: Option<&String>) -> AppResult<Timestamp> {
    let now = Local::now();

    let day = match date {
        Some(d) => {
            crate::utils::date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?
        }
        None => now.date_naive(),
    };

    match at {
        Some(t) => parse_time_on(day, t),
        None if date.is_none() => Ok(now),
        None => local_timestamp(day, now.time().with_nanosecond(0).unwrap_or(now.time())),
    }
}
