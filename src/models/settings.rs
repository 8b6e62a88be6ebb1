use super::work_record::Timestamp;
use crate::core::calculator::DEFAULT_STANDARD_MINUTES;
use chrono::Local;
use serde::{Deserialize, Serialize};

pub const SETTINGS_ID: &str = "main";
pub const DEFAULT_HOURLY_RATE: f64 = 3000.0;
pub const DEFAULT_OVERTIME_RATE: f64 = 3750.0;

/// Pay rates and the daily standard, one row per database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub id: String,
    pub hourly_rate: f64,
    pub overtime_rate: f64,
    /// Minutes per day paid at the regular rate.
    pub target_minutes_per_day: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Settings {
    pub fn with_timestamp(now: Timestamp) -> Self {
        Self {
            id: SETTINGS_ID.to_string(),
            hourly_rate: DEFAULT_HOURLY_RATE,
            overtime_rate: DEFAULT_OVERTIME_RATE,
            target_minutes_per_day: DEFAULT_STANDARD_MINUTES,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overtime rate as the calculator wants it: zero means "not configured".
    pub fn overtime_rate_opt(&self) -> Option<f64> {
        if self.overtime_rate > 0.0 {
            Some(self.overtime_rate)
        } else {
            None
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_timestamp(Local::now())
    }
}
