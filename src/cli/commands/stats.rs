use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::monthly_stats;
use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date::{month_bounds, parse_month, today, week_bounds};
use crate::utils::formatting::format_hours;
use crate::utils::{format_currency, mins2readable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { month } = cmd {
        let current = today();

        // current month: this week; past months: the week of their last day
        let reference = match month {
            Some(m) => {
                let first = parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?;
                let (_, last) = month_bounds(first);
                if current >= first && current <= last {
                    current
                } else {
                    last
                }
            }
            None => current,
        };

        let (month_first, month_last) = month_bounds(reference);
        let (week_first, week_last) = week_bounds(reference);
        let from = month_first.min(week_first);
        let to = month_last.max(week_last);

        let store = open_store(cfg)?;
        let records = store.range(from, to)?;
        let stats = monthly_stats(&records, reference);

        header(format!("Statistics for {}", stats.month));
        println!(
            "  Worked        : {} ({})",
            mins2readable(stats.total_minutes, false, false),
            format_hours(stats.total_hours)
        );
        println!(
            "  Earnings      : {}",
            format_currency(stats.total_earnings, &cfg.currency_symbol)
        );
        println!("  Working days  : {}", stats.working_days);
        println!(
            "  Average / day : {}",
            format_hours(stats.average_hours_per_day)
        );
        println!(
            "  Week {} → {} : {}",
            week_first,
            week_last,
            mins2readable(stats.weekly_minutes, false, false)
        );
    }

    Ok(())
}
