use crate::cli::commands::{open_store, separator};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionController;
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::models::work_record::WorkRecord;
use crate::models::work_status::WorkStatus;
use crate::ui::messages::info;
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::date::resolve_period;
use crate::utils::table::{Column, Table};
use crate::utils::{format_currency, mins2readable};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let store = open_store(cfg)?;
        let (from, to) = resolve_period(period.as_deref())?;
        let records = store.range(from, to)?;

        if records.is_empty() {
            info("No records for the selected period.");
            return Ok(());
        }

        let settings = store.get_settings()?;
        let now = Local::now();

        let mut table = Table::new(vec![
            Column::left("DATE"),
            Column::left("IN"),
            Column::left("OUT"),
            Column::right("BREAK"),
            Column::right("WORKED"),
            Column::right("EARNINGS"),
            Column::left("STATUS"),
        ])
        .with_separator(separator(cfg));

        let mut total_minutes = 0;
        let mut total_earnings = 0;

        for record in records {
            let shown = if record.status == WorkStatus::Working {
                SessionController::recompute(&record, now, &settings)
            } else {
                record
            };

            total_minutes += shown.total_work_minutes;
            total_earnings += shown.earnings;

            table.add_row(vec![
                shown.date_str(),
                colorize_optional(&WorkRecord::hhmm(&shown.clock_in)),
                colorize_optional(&WorkRecord::hhmm(&shown.clock_out)),
                format!("{}m", shown.total_break_minutes),
                mins2readable(shown.total_work_minutes, false, true),
                format_currency(shown.earnings, &cfg.currency_symbol),
                colorize_status(shown.status),
            ]);
        }

        print!("{}", table.render());
        println!();
        println!(
            "Σ worked {}   earnings {}",
            mins2readable(total_minutes, false, false),
            format_currency(total_earnings, &cfg.currency_symbol)
        );
    }

    Ok(())
}
