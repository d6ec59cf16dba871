//! Config management use case

use crate::error::{ItemTagsError, Result};
use crate::infrastructure::{Config, OutputStyle};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Service for reading and updating the config file
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load(&self.path)?;

        match key {
            "output" => Ok(config.output.to_string()),
            "log_level" => Ok(config.log_level),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load(&self.path)?;

        match key {
            "output" => {
                config.output = OutputStyle::from_str(value).map_err(ItemTagsError::Config)?;
            }
            "log_level" => {
                EnvFilter::try_new(value).map_err(|e| {
                    ItemTagsError::Config(format!("Invalid log level '{}': {}", value, e))
                })?;
                config.log_level = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }

        config.save(&self.path)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load(&self.path)
    }
}

fn unknown_key(key: &str) -> ItemTagsError {
    ItemTagsError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: output, log_level",
        key
    ))
}
