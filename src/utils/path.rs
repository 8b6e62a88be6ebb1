//! Path utilities: expand ~, check for an existing target before writing.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Refuse to clobber `path` unless `force` is set; create missing parent directories.
pub fn prepare_output(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    Ok(())
}
