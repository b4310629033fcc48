use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Labels offered when registering an attendee.
    #[serde(default = "default_genders")]
    pub genders: Vec<String>,
    /// Default file name for `export` when `--file` is omitted.
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_genders() -> Vec<String> {
    ["Male", "Female", "Other", "Prefer not to say"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_export_file() -> String {
    "attendance_data.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            genders: default_genders(),
            export_file: default_export_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("agrimpact")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".agrimpact")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("agrimpact.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("agrimpact.sqlite")
    }

    /// Database path with a leading `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Where a `--db` argument points.
    ///
    /// A relative name is placed inside the config directory, except in test
    /// mode where it is taken as given.
    pub fn resolve_database(name: &str, is_test: bool) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() || is_test {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Build the configuration for `init`.
    ///
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let database = match custom_db {
            Some(name) => Self::resolve_database(name, is_test),
            None => Self::database_file(),
        };

        let mut config = if is_test {
            Self::default()
        } else {
            Self::load()?
        };
        config.database = database.to_string_lossy().to_string();

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
