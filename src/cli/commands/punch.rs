use crate::cli::commands::{open_store, print_record};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::{AppError, AppResult};
use crate::models::clock_action::ClockAction;
use crate::ui::messages::success;
use crate::utils::time::resolve_punch_time;

/// Handle `in`, `break`, `resume` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (action, date, at) = match cmd {
        Commands::In { date, at } => (ClockAction::ClockIn, date, at),
        Commands::Break { date, at } => (ClockAction::BreakStart, date, at),
        Commands::Resume { date, at } => (ClockAction::BreakEnd, date, at),
        Commands::Out { date, at } => (ClockAction::ClockOut, date, at),
        _ => return Err(AppError::Other("not a punch command".into())),
    };

    let now = resolve_punch_time(date.as_ref(), at.as_ref())?;

    let mut store = open_store(cfg)?;
    let record = PunchLogic::punch(&mut store, action, now)?;

    success(format!(
        "{} at {} ({}).",
        capitalize(action.verb()),
        now.format("%H:%M"),
        record.date_str()
    ));
    print_record(&record, cfg);

    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
