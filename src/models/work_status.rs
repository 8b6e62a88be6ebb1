use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a day's record currently sits in the clock-in/break/clock-out cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    #[default]
    NotStarted,
    Working,
    OnBreak,
    Finished,
}

impl WorkStatus {
    pub const ALL: [WorkStatus; 4] = [
        WorkStatus::NotStarted,
        WorkStatus::Working,
        WorkStatus::OnBreak,
        WorkStatus::Finished,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            WorkStatus::NotStarted => "not_started",
            WorkStatus::Working => "working",
            WorkStatus::OnBreak => "on_break",
            WorkStatus::Finished => "finished",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "not_started" => Some(WorkStatus::NotStarted),
            "working" => Some(WorkStatus::Working),
            "on_break" => Some(WorkStatus::OnBreak),
            "finished" => Some(WorkStatus::Finished),
            _ => None,
        }
    }

    /// Lenient parser for CLI input: accepts `on_break`, `on-break`, `OnBreak`...
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized: String = code
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect();

        match normalized.as_str() {
            "notstarted" => Some(WorkStatus::NotStarted),
            "working" => Some(WorkStatus::Working),
            "onbreak" | "break" => Some(WorkStatus::OnBreak),
            "finished" | "done" => Some(WorkStatus::Finished),
            _ => None,
        }
    }

    /// Human label used in tables.
    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::NotStarted => "not started",
            WorkStatus::Working => "working",
            WorkStatus::OnBreak => "on break",
            WorkStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
