use crate::core::age::AgeLabels;
use crate::core::row::{DEFAULT_DATE_FORMAT, RowFormat};
use crate::errors::{AppError, AppResult};
use crate::models::SortOrder;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".babybirthdays";
const CONFIG_FILE: &str = "babybirthdays.conf";
const DATABASE_FILE: &str = "babybirthdays.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub default_sort: SortOrder,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default)]
    pub labels: AgeLabels,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            date_format: default_date_format(),
            default_sort: SortOrder::default(),
            separator_char: default_separator_char(),
            labels: AgeLabels::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("babybirthdays")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Database path with a leading `~/` expanded.
    pub fn database_path(&self) -> String {
        expand_tilde(&self.database).to_string_lossy().to_string()
    }

    /// First character of `separator_char`, used to draw table rules.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    pub fn row_format(&self) -> AppResult<RowFormat> {
        RowFormat::new(&self.date_format, self.labels.clone())
    }

    /// Resolve a database path given on the command line: `~` is expanded
    /// and a relative path lives in the configuration directory.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration directory, config file and database file.
    /// Returns the database path written into the configuration.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => Self::resolve_database(&name),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        Ok(db_path)
    }
}
