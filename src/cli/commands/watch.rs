use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::core::session::SessionController;
use crate::core::store::RecordStore;
use crate::core::ticker::{TickFlow, Ticker};
use crate::errors::{AppError, AppResult};
use crate::models::work_status::WorkStatus;
use crate::ui::messages::info;
use crate::utils::{format_currency, mins2readable};
use chrono::Local;
use std::time::Duration;

/// Handle `watch`: print the running projection once per tick. Never saves.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { interval, ticks } = cmd {
        let secs = interval.unwrap_or(cfg.tick_seconds);
        if secs == 0 {
            return Err(AppError::Other("interval must be > 0 seconds".into()));
        }

        let store = open_store(cfg)?;
        let settings = store.get_settings()?;

        let mut ticker = Ticker::new(Duration::from_secs(secs));
        if let Some(n) = ticks {
            ticker = ticker.with_max_ticks(*n);
        }

        let count = ticker.run(|_| {
            let now = Local::now();
            let record = PunchLogic::record_for_day(&store, now.date_naive(), now)?;

            if record.status != WorkStatus::Working {
                info(format!("Not working ({}), nothing to watch.", record.status));
                return Ok(TickFlow::Stop);
            }

            let projected = SessionController::recompute(&record, now, &settings);
            println!(
                "⏱️  {}  worked {}  break {} min  earnings {}",
                now.format("%H:%M:%S"),
                mins2readable(projected.total_work_minutes, false, false),
                projected.total_break_minutes,
                format_currency(projected.earnings, &cfg.currency_symbol)
            );
            Ok(TickFlow::Continue)
        })?;

        info(format!("Watch ended after {} refresh(es).", count));
    }

    Ok(())
}
