//! Initialize config use case

use crate::error::{ItemTagsError, Result};
use crate::infrastructure::config::{Config, CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};

/// Write a default config file. `path` may be a directory, in which case
/// `itemtags.toml` is created inside it. Returns the file written.
pub fn init(path: &Path) -> Result<PathBuf> {
    let config_path = if path.is_dir() || path.extension().is_none() {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        path.join(CONFIG_FILE)
    } else {
        path.to_path_buf()
    };

    if config_path.exists() {
        return Err(ItemTagsError::Config(format!(
            "Config already exists at {}",
            config_path.display()
        )));
    }

    Config::default().save(&config_path)?;
    Ok(config_path)
}
