use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::{AppError, ConfigError};
use crate::validation::{ReviewConfig, ValidatorConfig};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Genre used when none is given on the command line
    #[serde(default = "default_genre")]
    pub default_genre: String,

    /// Validation thresholds
    #[serde(default)]
    pub validator: ValidatorConfig,

    /// Accept/regenerate policy
    #[serde(default)]
    pub review: ReviewConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log crate
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_genre() -> String {
    "Poetry Collection".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_genre.trim().is_empty() {
            return Err(ConfigError::EmptyGenre);
        }

        self.validator.validate()?;
        self.review.validate()?;

        Ok(())
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Load the configuration, writing a default one if the file is missing.
    ///
    /// Returns the configuration and whether it was created.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<(Self, bool), AppError> {
        let path = path.as_ref();
        if path.exists() {
            return Ok((Self::load(path)?, false));
        }

        let config = Config::default();
        config.save(path)?;
        Ok((config, true))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            default_genre: default_genre(),
            validator: ValidatorConfig::default(),
            review: ReviewConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
