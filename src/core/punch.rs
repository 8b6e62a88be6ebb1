use crate::core::session::SessionController;
use crate::core::store::RecordStore;
use crate::core::transition::next_status;
use crate::errors::{AppError, AppResult};
use crate::models::clock_action::ClockAction;
use crate::models::work_record::{Timestamp, WorkRecord};
use crate::models::work_status::WorkStatus;
use crate::ui::messages::warning;
use chrono::NaiveDate;

/// High-level business logic for the `in` / `break` / `resume` / `out` commands.
pub struct PunchLogic;

impl PunchLogic {
    /// Load (or start) the record for `now`'s day, apply `action`, persist the result.
    pub fn punch<S: RecordStore>(
        store: &mut S,
        action: ClockAction,
        now: Timestamp,
    ) -> AppResult<WorkRecord> {
        let record = Self::record_for_day(store, now.date_naive(), now)?;

        validate_chronology(&record, action, now)?;

        let settings = store.get_settings()?;
        let updated = SessionController::apply(&record, action, now, &settings)?;

        store.save(&updated)?;

        let message = format!(
            "{} at {} (worked {} min, break {} min)",
            action_summary(action),
            now.format("%H:%M"),
            updated.total_work_minutes,
            updated.total_break_minutes
        );
        if let Err(e) = store.audit(action.as_str(), &updated.date_str(), &message) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(updated)
    }

    /// The day's record, or a fresh `NotStarted` one (not yet saved) if the day is untouched.
    pub fn record_for_day<S: RecordStore>(
        store: &S,
        date: NaiveDate,
        now: Timestamp,
    ) -> AppResult<WorkRecord> {
        Ok(store
            .get_by_date(date)?
            .into_iter()
            .next()
            .unwrap_or_else(|| WorkRecord::new_for_date(date, now)))
    }
}

/// Reject a punch time that would run the day backwards.
///
/// Only checked for punches the transition table accepts, so an illegal
/// action is still reported as such.
pub fn validate_chronology(
    record: &WorkRecord,
    action: ClockAction,
    now: Timestamp,
) -> AppResult<()> {
    if next_status(record.status, action).is_none() {
        return Ok(());
    }

    let fmt = |t: Timestamp| t.format("%Y-%m-%d %H:%M").to_string();

    match action {
        ClockAction::ClockIn => {
            if record.status == WorkStatus::Finished
                && let Some(out) = record.clock_out
                && now < out
            {
                return Err(AppError::InvalidTimestamp(format!(
                    "clock-in at {} is earlier than the previous clock-out at {}",
                    fmt(now),
                    fmt(out)
                )));
            }
        }
        ClockAction::BreakStart | ClockAction::BreakEnd | ClockAction::ClockOut => {
            if let Some(ci) = record.clock_in
                && now < ci
            {
                return Err(AppError::InvalidTimestamp(format!(
                    "{} is earlier than clock-in at {}",
                    fmt(now),
                    fmt(ci)
                )));
            }

            if record.status == WorkStatus::OnBreak
                && let Some(bs) = record.break_start
                && now < bs
            {
                return Err(AppError::InvalidTimestamp(format!(
                    "{} is earlier than break start at {}",
                    fmt(now),
                    fmt(bs)
                )));
            }

            // after a resume, nothing may land inside the closed window
            if record.status == WorkStatus::Working
                && let Some(be) = record.break_end
                && now < be
            {
                return Err(AppError::InvalidTimestamp(format!(
                    "{} is earlier than the end of the last break at {}",
                    fmt(now),
                    fmt(be)
                )));
            }
        }
    }

    Ok(())
}

fn action_summary(action: ClockAction) -> &'static str {
    match action {
        ClockAction::ClockIn => "Clocked in",
        ClockAction::BreakStart => "Break started",
        ClockAction::BreakEnd => "Break ended",
        ClockAction::ClockOut => "Clocked out",
    }
}
