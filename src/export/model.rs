// src/export/model.rs

use crate::models::work_record::{Timestamp, WorkRecord};
use serde::Serialize;

/// Flat row used by the CSV export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub break_minutes: i64,
    pub work_minutes: i64,
    pub earnings: i64,
    pub status: String,
}

impl From<&WorkRecord> for RecordExport {
    fn from(r: &WorkRecord) -> Self {
        let stamp = |t: &Option<Timestamp>| t.map(|v| v.to_rfc3339()).unwrap_or_default();
        Self {
            date: r.date_str(),
            clock_in: stamp(&r.clock_in),
            clock_out: stamp(&r.clock_out),
            break_minutes: r.total_break_minutes,
            work_minutes: r.total_work_minutes,
            earnings: r.earnings,
            status: r.status.to_db_str().to_string(),
        }
    }
}

/// Header per CSV
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "clock_in",
        "clock_out",
        "break_minutes",
        "work_minutes",
        "earnings",
        "status",
    ]
}

pub(crate) fn record_to_row(e: &RecordExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.clock_in.clone(),
        e.clock_out.clone(),
        e.break_minutes.to_string(),
        e.work_minutes.to_string(),
        e.earnings.to_string(),
        e.status.clone(),
    ]
}
