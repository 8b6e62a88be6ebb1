use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockAction {
    ClockIn,
    BreakStart,
    BreakEnd,
    ClockOut,
}

impl ClockAction {
    pub const ALL: [ClockAction; 4] = [
        ClockAction::ClockIn,
        ClockAction::BreakStart,
        ClockAction::BreakEnd,
        ClockAction::ClockOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClockAction::ClockIn => "clock_in",
            ClockAction::BreakStart => "break_start",
            ClockAction::BreakEnd => "break_end",
            ClockAction::ClockOut => "clock_out",
        }
    }

    /// Name of the CLI subcommand that triggers this action.
    pub fn command_name(&self) -> &'static str {
        match self {
            ClockAction::ClockIn => "in",
            ClockAction::BreakStart => "break",
            ClockAction::BreakEnd => "resume",
            ClockAction::ClockOut => "out",
        }
    }

    /// Verb phrase used in messages ("Cannot clock out while not started").
    pub fn verb(&self) -> &'static str {
        match self {
            ClockAction::ClockIn => "clock in",
            ClockAction::BreakStart => "start a break",
            ClockAction::BreakEnd => "end the break",
            ClockAction::ClockOut => "clock out",
        }
    }
}

impl fmt::Display for ClockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}
