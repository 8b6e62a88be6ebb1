use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()
}

pub fn month_key(d: NaiveDate) -> String {
    d.format("%Y-%m").to_string()
}

/// First and last day of the month containing `d`.
pub fn month_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = d.with_day(1).unwrap_or(d);
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_first.and_then(|n| n.pred_opt()).unwrap_or(first);
    (first, last)
}

/// Monday and Sunday of the week containing `d`.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let back = d.weekday().num_days_from_monday() as u64;
    let monday = d.checked_sub_days(Days::new(back)).unwrap_or(d);
    let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(d);
    (monday, sunday)
}

/// Resolve a single period token (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) to an inclusive date span.
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Some(first) = parse_month(p) {
        return Ok(month_bounds(first));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

/// Resolve a `--period` / `--range` argument.
///
/// - `None` → current month
/// - `all` → everything
/// - `a:b` → from the start of `a` to the end of `b`
/// - otherwise a single token, see [`period_bounds`]
pub fn resolve_period(period: Option<&str>) -> AppResult<(NaiveDate, NaiveDate)> {
    let Some(p) = period else {
        return Ok(month_bounds(today()));
    };

    if p == "all" {
        return Ok((NaiveDate::MIN, NaiveDate::MAX));
    }

    if let Some((start, end)) = p.split_once(':') {
        let (from, _) = period_bounds(start).map_err(AppError::InvalidDate)?;
        let (_, to) = period_bounds(end).map_err(AppError::InvalidDate)?;
        if to < from {
            return Err(AppError::InvalidDate(format!(
                "Range end {} is before range start {}",
                end, start
            )));
        }
        return Ok((from, to));
    }

    period_bounds(p).map_err(AppError::InvalidDate)
}
