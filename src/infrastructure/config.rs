//! Configuration management

use crate::error::{ItemTagsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default config file name, looked up in the current directory
pub const CONFIG_FILE: &str = "itemtags.toml";

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "ITEMTAGS_CONFIG";

/// How validated payloads are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    #[default]
    Pretty,
    Compact,
}

impl OutputStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputStyle::Pretty => "pretty",
            OutputStyle::Compact => "compact",
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(OutputStyle::Pretty),
            "compact" => Ok(OutputStyle::Compact),
            _ => Err(format!(
                "Invalid output style: '{}'. Valid styles are: pretty, compact",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputStyle,
    /// `tracing` filter directive, e.g. `warn` or `itemtags=debug`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputStyle::Pretty,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Resolve the config path: explicit path, then `ITEMTAGS_CONFIG`,
    /// then `itemtags.toml` in the current directory
    pub fn locate(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(std::env::current_dir()?.join(CONFIG_FILE))
    }

    /// Load config from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(ItemTagsError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            ItemTagsError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to a file, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }
}
