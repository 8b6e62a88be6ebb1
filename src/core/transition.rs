//! Which punch is legal from which status.

use crate::models::clock_action::ClockAction;
use crate::models::work_status::WorkStatus;

/// Next status for `action` taken while in `status`, or `None` when the punch is not allowed.
pub fn next_status(status: WorkStatus, action: ClockAction) -> Option<WorkStatus> {
    use ClockAction::*;
    use WorkStatus::*;

    match (status, action) {
        (NotStarted, ClockIn) => Some(Working),
        (Working, BreakStart) => Some(OnBreak),
        (Working, ClockOut) => Some(Finished),
        (OnBreak, BreakEnd) => Some(Working),
        (OnBreak, ClockOut) => Some(Finished),
        (Finished, ClockIn) => Some(Working),
        _ => None,
    }
}

/// Punches accepted from `status`, in table order.
pub fn allowed_actions(status: WorkStatus) -> Vec<ClockAction> {
    ClockAction::ALL
        .into_iter()
        .filter(|a| next_status(status, *a).is_some())
        .collect()
}
