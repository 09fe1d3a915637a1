use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const CONFIG_FIELDS: [&str; 3] = ["database", "date_format", "separator_char"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            date_format: default_date_format(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rticket")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rticket")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rticket.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rticket.sqlite")
    }

    /// First character of `separator_char`, `-` when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Parse a YAML document; missing fields take their defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Fields absent from a YAML document (they silently take defaults).
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;

        let map = value.as_mapping();
        Ok(CONFIG_FIELDS
            .into_iter()
            .filter(|f| map.is_none_or(|m| !m.contains_key(*f)))
            .collect())
    }

    /// Resolve the database path for `init` and `--db`: a custom name is taken as is
    /// when absolute, otherwise relative to the config directory.
    pub fn resolve_database(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::database_file(),
        }
    }

    /// Apply a `--db` override, resolved the same way `init` resolves it.
    pub fn apply_db_override(&mut self, custom: Option<&str>) {
        if let Some(name) = custom {
            self.database = Self::resolve_database(Some(name))
                .to_string_lossy()
                .to_string();
        }
    }

    /// Initialize configuration and database files.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_name: Option<&str>, is_test: bool) -> AppResult<Self> {
        fs::create_dir_all(Self::config_dir())?;

        let db_path = Self::resolve_database(custom_name);

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::load().unwrap_or_default()
        };

        if !is_test {
            config.save()?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
