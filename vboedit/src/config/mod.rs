//! Persistent defaults for every transform option.
//!
//! Settings live in an INI file at `<config_dir>/vboedit/config.ini`:
//!
//! ```ini
//! [heading]
//! column = heading_gps
//! smoothing_window = 5
//!
//! [fuel]
//! engine_displacement_cc = 1600
//! ```
//!
//! A missing file or key falls back to the built-in default. Values that
//! are present but unparsable are rejected rather than silently ignored.

mod keys;

pub use keys::ConfigKey;

use std::fs;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;
use tracing::debug;

use crate::transform::{
    AviSyncConfig, FuelConfig, HeadingConfig, OversteerConfig, RotationSpeedConfig,
};

/// Directory name under the platform config directory.
const CONFIG_DIR_NAME: &str = "vboedit";

/// Config file name.
const CONFIG_FILE_NAME: &str = "config.ini";

/// Errors from loading, saving or editing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),
}

/// `[avi]` settings: the sync clock plus the file index column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AviConfig {
    pub sync: AviSyncConfig,
    pub index_column: String,
}

impl Default for AviConfig {
    fn default() -> Self {
        Self {
            sync: AviSyncConfig::default(),
            index_column: "avifileindex".to_string(),
        }
    }
}

/// All settings from `config.ini`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub heading: HeadingConfig,
    pub rotation_speed: RotationSpeedConfig,
    pub oversteer: OversteerConfig,
    pub fuel: FuelConfig,
    pub avi: AviConfig,
}

/// Default location of the config file.
///
/// Falls back to the working directory on platforms without a config
/// directory.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

impl ConfigFile {
    /// Load from [`config_file_path`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(config_file_path())
    }

    /// Load from `path`, using defaults when the file does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::default();
        for key in ConfigKey::all() {
            let value = ini
                .section(Some(key.section()))
                .and_then(|section| section.get(key.key_name()));
            if let Some(value) = value {
                key.set(&mut config, value.trim())?;
            }
        }

        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Save to [`config_file_path`].
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(config_file_path())
    }

    /// Write every setting to `path`, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let write_error = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let mut ini = Ini::new();
        for key in ConfigKey::all() {
            ini.with_section(Some(key.section()))
                .set(key.key_name(), key.get(self));
        }
        ini.write_to_file(path).map_err(write_error)?;

        debug!(path = %path.display(), "saved config file");
        Ok(())
    }
}
