use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use chrono::Local;

/// Handle `backup` and `restore`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Backup { file, compress } => {
            let mut store = open_store(cfg)?;
            BackupLogic::backup(&mut store, &expand_tilde(file), *compress, Local::now())?;
        }
        Commands::Restore { file } => {
            let path = expand_tilde(file);
            let mut store = open_store(cfg)?;
            let count = BackupLogic::restore(&mut store, &path, Local::now())?;
            success(format!("Restored {} records from {}", count, path.display()));
        }
        _ => {}
    }

    Ok(())
}
