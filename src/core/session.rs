use crate::core::calculator::{
    compute_break_minutes, compute_earnings, compute_worked_minutes, round_earnings,
};
use crate::core::transition::next_status;
use crate::errors::{AppError, AppResult};
use crate::models::clock_action::ClockAction;
use crate::models::settings::Settings;
use crate::models::work_record::{Timestamp, WorkRecord};
use crate::models::work_status::WorkStatus;

/// State machine for a single day's record.
///
/// Both entry points are pure: they never touch storage and never read the
/// clock, so the caller decides what "now" is and when to persist.
pub struct SessionController;

impl SessionController {
    /// Apply one punch to `record`.
    ///
    /// On rejection the caller's record is left as it was and
    /// [`AppError::InvalidTransition`] is returned.
    pub fn apply(
        record: &WorkRecord,
        action: ClockAction,
        now: Timestamp,
        settings: &Settings,
    ) -> AppResult<WorkRecord> {
        let previous = record.status;
        let next = next_status(previous, action).ok_or(AppError::InvalidTransition {
            status: previous,
            action,
        })?;

        let mut updated = record.clone();

        match action {
            ClockAction::ClockIn => {
                updated.clock_in = Some(now);
                updated.clock_out = None;

                // Coming back from Finished starts a new span.
                if previous == WorkStatus::Finished {
                    updated.total_break_minutes = 0;
                    updated.break_start = None;
                    updated.break_end = None;
                }
            }
            ClockAction::BreakStart => {
                // the stamps always describe the latest window; earlier ones live in the total
                updated.break_start = Some(now);
                updated.break_end = None;
            }
            ClockAction::BreakEnd => {
                // A break_end with no break_start still resumes work but adds nothing.
                if updated.break_start.is_some() {
                    updated.total_break_minutes +=
                        compute_break_minutes(updated.break_start, Some(now), 0);
                }
                updated.break_end = Some(now);
            }
            ClockAction::ClockOut => {
                if previous == WorkStatus::OnBreak {
                    updated.total_break_minutes +=
                        compute_break_minutes(updated.break_start, Some(now), 0);
                    updated.break_end = Some(now);
                }
                updated.clock_out = Some(now);
            }
        }

        Self::refresh_derived(&mut updated, now, settings);
        updated.status = next;
        updated.updated_at = now;

        Ok(updated)
    }

    /// Project worked minutes and earnings to `now` without changing status.
    ///
    /// Idempotent for a fixed `now`; `updated_at` is left alone since nothing was mutated.
    pub fn recompute(record: &WorkRecord, now: Timestamp, settings: &Settings) -> WorkRecord {
        let mut projected = record.clone();
        Self::refresh_derived(&mut projected, now, settings);
        projected
    }

    /// Recalculate the two derived fields from the record's own stamps.
    pub(crate) fn refresh_derived(record: &mut WorkRecord, now: Timestamp, settings: &Settings) {
        let end = record.clock_out.unwrap_or(now);
        let worked = compute_worked_minutes(record.clock_in, end, record.total_break_minutes);
        let earnings = compute_earnings(
            worked,
            settings.hourly_rate,
            settings.overtime_rate_opt(),
            settings.target_minutes_per_day,
        );

        record.total_work_minutes = worked;
        record.earnings = round_earnings(earnings);
    }
}
