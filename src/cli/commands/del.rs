use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::edit::RecordSelector;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { target, force } = cmd {
        let selector = RecordSelector::parse(target);

        if !*force
            && !ask_confirmation(&format!(
                "Delete the record for {}? This action is irreversible.",
                selector
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = open_store(cfg)?;
        let deleted = DeleteLogic::apply(&mut store, &selector)?;

        success(format!("Record for {} has been deleted.", deleted.date_str()));
    }

    Ok(())
}
