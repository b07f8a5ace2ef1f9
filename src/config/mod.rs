use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

/// Contents of `kpiview.conf` (YAML). Every field has a default, so an
/// older file with fewer keys still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite file, or directory with AGENTDB.csv / KPIDB.csv
    #[serde(default = "default_data_source")]
    pub data_source: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_card_width")]
    pub card_width: usize,
    /// tracing filter used when neither KPIVIEW_LOG nor -v is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_source() -> String {
    Config::data_file().to_string_lossy().to_string()
}
fn default_title() -> String {
    "KEETA AGENT VIEW".to_string()
}
fn default_color() -> bool {
    true
}
fn default_card_width() -> usize {
    28
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: default_data_source(),
            title: default_title(),
            color: default_color(),
            card_width: default_card_width(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("kpiview")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".kpiview")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("kpiview.conf")
    }

    /// Default location of the data file
    pub fn data_file() -> PathBuf {
        Self::config_dir().join("kpiview.sqlite")
    }

    /// Load configuration from the standard file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Create the config directory and file.
    ///
    /// `data_source` overrides the default data path; a relative path is
    /// made absolute against the current directory. With `is_test` the
    /// config file is not written. Returns the resulting configuration.
    pub fn init_all(data_source: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let data_path = match data_source {
            Some(name) => std::path::absolute(crate::utils::path::expand_tilde(name))?,
            None => Self::data_file(),
        };

        let config = Config {
            data_source: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
