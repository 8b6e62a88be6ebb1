use crate::cli::commands::{open_store, print_record};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, RecordChanges, RecordSelector};
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        target,
        clock_in,
        clock_out,
        break_start,
        break_end,
        break_minutes,
        status,
        clear_out,
        clear_break,
    } = cmd
    {
        let selector = RecordSelector::parse(target);
        let changes = RecordChanges {
            clock_in: clock_in.clone(),
            clock_out: clock_out.clone(),
            break_start: break_start.clone(),
            break_end: break_end.clone(),
            break_minutes: *break_minutes,
            status: status.clone(),
            clear_clock_out: *clear_out,
            clear_break: *clear_break,
        };

        let mut store = open_store(cfg)?;
        let updated = EditLogic::apply(&mut store, &selector, &changes, Local::now())?;

        success(format!("Record {} updated.", updated.date_str()));
        print_record(&updated, cfg);
    }

    Ok(())
}
