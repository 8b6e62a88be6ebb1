pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod punch;
pub mod settings;
pub mod stats;
pub mod status;
pub mod watch;

use crate::config::Config;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::models::work_record::WorkRecord;
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::{format_currency, mins2readable};

/// Open the configured database, creating the schema when needed.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    SqliteStore::open(&cfg.database)
}

/// First character of `separator_char`, `-` when empty.
pub(crate) fn separator(cfg: &Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}

/// Multi-line description of a record, shared by punches, `status` and `edit`.
pub(crate) fn print_record(record: &WorkRecord, cfg: &Config) {
    println!("📅 {}  {}", record.date_str(), colorize_status(record.status));
    println!(
        "   in  {}   out {}",
        colorize_optional(&WorkRecord::hhmm(&record.clock_in)),
        colorize_optional(&WorkRecord::hhmm(&record.clock_out))
    );
    println!(
        "   break {} → {}  ({} min)",
        colorize_optional(&WorkRecord::hhmm(&record.break_start)),
        colorize_optional(&WorkRecord::hhmm(&record.break_end)),
        record.total_break_minutes
    );
    println!(
        "   worked {}   earnings {}",
        mins2readable(record.total_work_minutes, false, false),
        format_currency(record.earnings, &cfg.currency_symbol)
    );
}
