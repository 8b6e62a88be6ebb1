use super::work_status::WorkStatus;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Point in time as recorded by a punch.
pub type Timestamp = DateTime<Local>;

/// One day of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub id: String,                       // ⇔ work_records.id (UUID v4)
    pub date: NaiveDate,                  // ⇔ work_records.date (TEXT "YYYY-MM-DD")
    pub clock_in: Option<Timestamp>,      // ⇔ work_records.clock_in (RFC 3339)
    pub clock_out: Option<Timestamp>,     // ⇔ work_records.clock_out
    pub break_start: Option<Timestamp>,   // ⇔ work_records.break_start
    pub break_end: Option<Timestamp>,     // ⇔ work_records.break_end
    pub total_break_minutes: i64,         // accumulated over the current span
    pub total_work_minutes: i64,          // derived
    pub status: WorkStatus,
    pub earnings: i64,                    // derived, whole yen
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WorkRecord {
    /// Fresh `NotStarted` record for `date`, as created the first time a day is touched.
    pub fn new_for_date(date: NaiveDate, now: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            clock_in: None,
            clock_out: None,
            break_start: None,
            break_end: None,
            total_break_minutes: 0,
            total_work_minutes: 0,
            status: WorkStatus::NotStarted,
            earnings: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `HH:MM` of an optional stamp, `--:--` when missing.
    pub fn hhmm(ts: &Option<Timestamp>) -> String {
        ts.map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }
}
