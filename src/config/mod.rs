use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Seconds between two refreshes of `watch`.
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: u64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_tick_seconds() -> u64 {
    60
}
fn default_currency_symbol() -> String {
    "¥".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            tick_seconds: default_tick_seconds(),
            currency_symbol: default_currency_symbol(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// `~/.rworklog` (falls back to the working directory when no home is known).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworklog")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklog.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworklog.sqlite")
    }

    /// Load the configuration file, or defaults when it does not exist yet.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        if cfg.tick_seconds == 0 {
            return Err(AppError::Config(format!(
                "tick_seconds must be > 0 in {}",
                path.display()
            )));
        }
        Ok(cfg)
    }

    /// Create the config directory and file. Returns the database path to use.
    ///
    /// A relative `custom_db` is placed inside the config directory. With
    /// `is_test` the config file is left alone.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() || is_test {
                    p.to_path_buf()
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            fs::write(Self::config_file(), serde_yaml::to_string(&config)?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
