use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub month: String, // "YYYY-MM"
    pub total_minutes: i64,
    pub total_hours: f64,
    pub total_earnings: i64,
    pub working_days: usize,
    pub average_hours_per_day: f64,
    pub weekly_minutes: i64,
}
