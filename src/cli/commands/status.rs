use crate::cli::commands::{open_store, print_record};
use crate::config::Config;
use crate::core::calculator::is_overtime;
use crate::core::punch::PunchLogic;
use crate::core::session::SessionController;
use crate::core::store::RecordStore;
use crate::core::transition::allowed_actions;
use crate::errors::AppResult;
use crate::models::work_status::WorkStatus;
use crate::ui::messages::{info, warning};
use chrono::Local;

/// Handle `status`: today's record projected to now.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let now = Local::now();
    let settings = store.get_settings()?;

    let record = PunchLogic::record_for_day(&store, now.date_naive(), now)?;

    // only a running session moves with the clock
    let shown = if record.status == WorkStatus::Working {
        SessionController::recompute(&record, now, &settings)
    } else {
        record
    };

    print_record(&shown, cfg);

    if is_overtime(shown.total_work_minutes, settings.target_minutes_per_day) {
        warning(format!(
            "Overtime: {} min over the {} min target.",
            shown.total_work_minutes - settings.target_minutes_per_day,
            settings.target_minutes_per_day
        ));
    }

    let next: Vec<&str> = allowed_actions(shown.status)
        .into_iter()
        .map(|a| a.command_name())
        .collect();
    info(format!("Next: {}", next.join(", ")));

    Ok(())
}
