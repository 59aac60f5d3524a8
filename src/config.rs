//! Application settings and the directory they live in.
//!
//! Settings are read from `academy.toml` inside a `.academy-catalog` folder
//! under the OS config directory, or under `ACADEMY_CONFIG_HOME` when that
//! variable is set (tests and portable setups). A missing file means defaults.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::catalog::DEFAULT_RELATED_LIMIT;

/// Name of the application directory under the config root.
pub const APP_DIR_NAME: &str = ".academy-catalog";
/// Settings file inside [`APP_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "academy.toml";
/// Environment override for the config root.
pub const CONFIG_HOME_ENV: &str = "ACADEMY_CONFIG_HOME";

const PROGRESS_FILE_NAME: &str = "viewed_trainings.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings shared by the desktop browser and the API server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcademyConfig {
    /// Course spreadsheet (first sheet is read).
    pub spreadsheet_path: PathBuf,
    /// Listen address of `academy_api`.
    pub api_addr: String,
    /// Where viewed trainings are stored; defaults to the app directory.
    pub progress_path: Option<PathBuf>,
    /// Take hero title/description from the first course.
    pub hero_from_first_course: bool,
    /// Maximum related trainings listed under a course.
    pub related_limit: usize,
}

impl Default for AcademyConfig {
    fn default() -> Self {
        Self {
            spreadsheet_path: PathBuf::from("public/data/academy.xlsx"),
            api_addr: "127.0.0.1:9002".to_string(),
            progress_path: None,
            hero_from_first_course: false,
            related_limit: DEFAULT_RELATED_LIMIT,
        }
    }
}

impl AcademyConfig {
    /// Load settings from the app directory, returning defaults if missing.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = app_root_dir()?.join(CONFIG_FILE_NAME);
        Self::load_from(&path)
    }

    /// Load settings from an explicit file, returning defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Progress file location, falling back to the app directory.
    pub fn progress_file(&self) -> Result<PathBuf, ConfigError> {
        match &self.progress_path {
            Some(path) => Ok(path.clone()),
            None => Ok(app_root_dir()?.join(PROGRESS_FILE_NAME)),
        }
    }
}

/// Return the `.academy-catalog` directory, creating it if needed.
pub fn app_root_dir() -> Result<PathBuf, ConfigError> {
    let base = config_base_dir().ok_or(ConfigError::NoBaseDir)?;
    let path = base.join(APP_DIR_NAME);
    std::fs::create_dir_all(&path).map_err(|source| ConfigError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn config_base_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_HOME_ENV) {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}
