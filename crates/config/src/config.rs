//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the tack application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persistence::{
    default_board_path, default_theme_path, find_config_file, read_config_file, write_config_file,
};
use crate::sensors::SensorConfig;

/// Where the board snapshot and the theme preference are stored.
///
/// Both paths default to files in the user data directory.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use tack_config::StorageConfig;
///
/// let storage = StorageConfig {
///     board_path: Some(PathBuf::from("/tmp/board.json")),
///     theme_path: None,
/// };
/// assert_eq!(storage.board_path().unwrap(), PathBuf::from("/tmp/board.json"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the board snapshot file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_path: Option<PathBuf>,

    /// Override for the theme preference file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Returns the board snapshot path, falling back to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the data directory cannot
    /// be determined.
    pub fn board_path(&self) -> Result<PathBuf> {
        match &self.board_path {
            Some(path) => Ok(path.clone()),
            None => default_board_path(),
        }
    }

    /// Returns the theme preference path, falling back to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the data directory cannot
    /// be determined.
    pub fn theme_path(&self) -> Result<PathBuf> {
        match &self.theme_path {
            Some(path) => Ok(path.clone()),
            None => default_theme_path(),
        }
    }
}

/// The main configuration struct for the tack application.
///
/// # Examples
///
/// ```
/// use tack_config::{Config, SensorConfig};
///
/// let config = Config::default();
/// assert_eq!(config.sensors, SensorConfig::default());
/// assert!(config.storage.board_path.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Drag activation thresholds.
    #[serde(default)]
    pub sensors: SensorConfig,

    /// Storage locations.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./tack.json5` or `./tack.json`
    /// 2. User: `~/.config/tack/config.json5` or `~/.config/tack/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tack_config::Config;
    ///
    /// # async fn example() -> tack_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Drag starts after {}px", config.sensors.pointer.distance);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                tracing::debug!(?path, "loading config file");
                Self::load_from(&path)
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tack_config::Config;
    ///
    /// # fn example() -> tack_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a sensor threshold is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.sensors.pointer.distance = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.sensors.validate()
    }
}
