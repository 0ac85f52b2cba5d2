use crate::core::categorize::MealWindows;
use crate::core::parse::ParseMode;
use crate::core::pivot::DateOrder;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Header of the employee name column in input and output files.
    pub name_column: String,
    pub parse_mode: ParseMode,
    pub date_order: DateOrder,
    /// Prefix of generated output file names.
    pub output_prefix: String,
    /// Directory generated output files are written to ("." = current dir).
    pub output_dir: String,
    pub default_format: String,
    pub windows: MealWindows,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name_column: "FirstName".to_string(),
            parse_mode: ParseMode::Lenient,
            date_order: DateOrder::Chronological,
            output_prefix: "Total_punches_dinning".to_string(),
            output_dir: ".".to_string(),
            default_format: "csv".to_string(),
            windows: MealWindows::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchcat")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchcat")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchcat.conf")
    }

    /// Config file to use: the `--config` override if given, the standard one otherwise.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.name_column.trim().is_empty() {
            return Err(AppError::Config("name_column must not be empty".into()));
        }
        if self.output_prefix.trim().is_empty() {
            return Err(AppError::Config("output_prefix must not be empty".into()));
        }
        self.windows.validate()
    }

    /// Directory for generated output files, `~` expanded.
    pub fn output_dir(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    /// Write a default configuration with the given windows to `path`,
    /// creating parent dirs.
    pub fn init_at(path: &Path, windows: MealWindows, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let cfg = Config {
            windows,
            ..Config::default()
        };
        cfg.save(path)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
