use crate::core::calculator::compute_break_minutes;
use crate::core::session::SessionController;
use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::work_record::{Timestamp, WorkRecord};
use crate::models::work_status::WorkStatus;
use crate::ui::messages::warning;
use crate::utils::date::parse_date;
use crate::utils::time::parse_time_on;
use chrono::NaiveDate;

/// How a command names a record: by date (`2025-06-02`) or by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    Date(NaiveDate),
    Id(String),
}

impl RecordSelector {
    pub fn parse(input: &str) -> Self {
        match parse_date(input) {
            Some(d) => RecordSelector::Date(d),
            None => RecordSelector::Id(input.trim().to_string()),
        }
    }

    /// Find the record or fail with `RecordNotFound`.
    pub fn resolve<S: RecordStore>(&self, store: &S) -> AppResult<WorkRecord> {
        let found = match self {
            RecordSelector::Date(d) => store.get_by_date(*d)?.into_iter().next(),
            RecordSelector::Id(id) => store.get(id)?,
        };

        found.ok_or_else(|| AppError::RecordNotFound(self.to_string()))
    }
}

impl std::fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordSelector::Date(d) => write!(f, "{}", d),
            RecordSelector::Id(id) => f.write_str(id),
        }
    }
}

/// Raw values from the edit form / command line. Times are `HH:MM` on the record's day.
#[derive(Debug, Default, Clone)]
pub struct RecordChanges {
    pub clock_in: Option<String>,
    pub clock_out: Option<String>,
    pub break_start: Option<String>,
    pub break_end: Option<String>,
    pub break_minutes: Option<i64>,
    pub status: Option<String>,
    pub clear_clock_out: bool,
    pub clear_break: bool,
}

impl RecordChanges {
    pub fn is_empty(&self) -> bool {
        self.clock_in.is_none()
            && self.clock_out.is_none()
            && self.break_start.is_none()
            && self.break_end.is_none()
            && self.break_minutes.is_none()
            && self.status.is_none()
            && !self.clear_clock_out
            && !self.clear_break
    }
}

/// High-level business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    /// Validate `changes`, apply them to the selected record, recompute and save.
    ///
    /// Nothing is written when validation fails.
    pub fn apply<S: RecordStore>(
        store: &mut S,
        selector: &RecordSelector,
        changes: &RecordChanges,
        now: Timestamp,
    ) -> AppResult<WorkRecord> {
        if changes.is_empty() {
            return Err(AppError::Other(
                "Nothing to do: specify at least one field to change.".into(),
            ));
        }

        let record = selector.resolve(store)?;
        let settings = store.get_settings()?;
        let mut updated = Self::merge(&record, changes, now)?;
        SessionController::refresh_derived(&mut updated, now, &settings);
        updated.updated_at = now;

        store.save(&updated)?;

        let message = format!(
            "in {} out {} break {} min, worked {} min",
            WorkRecord::hhmm(&updated.clock_in),
            WorkRecord::hhmm(&updated.clock_out),
            updated.total_break_minutes,
            updated.total_work_minutes
        );
        if let Err(e) = store.audit("edit", &updated.date_str(), &message) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(updated)
    }

    /// Produce the edited record (derived fields not yet refreshed).
    pub fn merge(
        record: &WorkRecord,
        changes: &RecordChanges,
        now: Timestamp,
    ) -> AppResult<WorkRecord> {
        let day = record.date;
        let parse = |v: &Option<String>| -> AppResult<Option<Timestamp>> {
            v.as_deref().map(|s| parse_time_on(day, s)).transpose()
        };

        let mut out = record.clone();

        if let Some(t) = parse(&changes.clock_in)? {
            out.clock_in = Some(t);
        }
        if changes.clear_clock_out {
            out.clock_out = None;
        }
        if let Some(t) = parse(&changes.clock_out)? {
            out.clock_out = Some(t);
        }

        if changes.clear_break {
            out.break_start = None;
            out.break_end = None;
            out.total_break_minutes = 0;
        }
        let new_break_start = parse(&changes.break_start)?;
        let new_break_end = parse(&changes.break_end)?;
        if let Some(t) = new_break_start {
            out.break_start = Some(t);
        }
        if let Some(t) = new_break_end {
            out.break_end = Some(t);
        }

        if let Some(code) = &changes.status {
            out.status =
                WorkStatus::from_code(code).ok_or_else(|| AppError::InvalidStatus(code.clone()))?;
        }

        // an open break has no end yet; earlier windows are already in the total
        if out.status == WorkStatus::OnBreak && new_break_end.is_none() {
            out.break_end = None;
        }

        if let (Some(ci), Some(co)) = (out.clock_in, out.clock_out)
            && co < ci
        {
            return Err(AppError::InvalidTimestamp(format!(
                "clock-out {} is earlier than clock-in {}",
                co.format("%H:%M"),
                ci.format("%H:%M")
            )));
        }
        if let (Some(bs), Some(be)) = (out.break_start, out.break_end)
            && be < bs
        {
            return Err(AppError::InvalidTimestamp(format!(
                "break end {} is earlier than break start {}",
                be.format("%H:%M"),
                bs.format("%H:%M")
            )));
        }
        if let Some(m) = changes.break_minutes
            && m < 0
        {
            return Err(AppError::InvalidTimestamp(format!(
                "break minutes cannot be negative ({})",
                m
            )));
        }
        if out.clock_in.is_none() && out.clock_out.is_some() {
            return Err(AppError::InvalidTimestamp(
                "a clock-out needs a clock-in".into(),
            ));
        }

        check_status(&out)?;

        let break_pair_edited = new_break_start.is_some() || new_break_end.is_some();
        out.total_break_minutes = if break_pair_edited
            && out.break_start.is_some()
            && out.break_end.is_some()
        {
            compute_break_minutes(out.break_start, out.break_end, out.total_break_minutes)
        } else if let Some(m) = changes.break_minutes {
            m
        } else {
            out.total_break_minutes
        };

        out.updated_at = now;
        Ok(out)
    }
}

/// The status has to agree with the stamps, otherwise the stored totals stop making sense.
fn check_status(r: &WorkRecord) -> AppResult<()> {
    let open = matches!(r.status, WorkStatus::Working | WorkStatus::OnBreak);

    let problem = if r.status == WorkStatus::NotStarted && r.clock_in.is_some() {
        Some("cannot have a clock-in")
    } else if open && r.clock_in.is_none() {
        Some("needs a clock-in")
    } else if open && r.clock_out.is_some() {
        Some("cannot have a clock-out (use --clear-out)")
    } else if r.status == WorkStatus::OnBreak && (r.break_start.is_none() || r.break_end.is_some())
    {
        Some("needs an open break start")
    } else if r.status == WorkStatus::Finished && r.clock_out.is_none() {
        Some("needs a clock-out")
    } else {
        None
    };

    match problem {
        Some(p) => Err(AppError::InvalidStatus(format!(
            "a record that is {} {}",
            r.status, p
        ))),
        None => Ok(()),
    }
}
