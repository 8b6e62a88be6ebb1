use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::{SettingsLogic, SettingsUpdate};
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::ui::messages::{info, success};
use chrono::Local;

fn print_settings(s: &Settings, cfg: &Config) {
    println!("⚙️  Settings:");
    println!("  hourly rate    : {}{}", cfg.currency_symbol, s.hourly_rate);
    match s.overtime_rate_opt() {
        Some(ot) => println!("  overtime rate  : {}{}", cfg.currency_symbol, ot),
        None => println!("  overtime rate  : 1.25 x hourly rate"),
    }
    println!("  target per day : {} min", s.target_minutes_per_day);
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print,
        hourly_rate,
        overtime_rate,
        target_minutes,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        let update = SettingsUpdate {
            hourly_rate: *hourly_rate,
            overtime_rate: *overtime_rate,
            target_minutes_per_day: *target_minutes,
        };

        if update.is_empty() {
            if !*print {
                info("No changes given; current settings:");
            }
            print_settings(&store.get_settings()?, cfg);
            return Ok(());
        }

        let saved = SettingsLogic::update(&mut store, &update, Local::now())?;
        success("Settings updated.");
        if *print {
            print_settings(&saved, cfg);
        }
    }

    Ok(())
}
