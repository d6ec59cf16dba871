//! Payload input from a file or stdin

use crate::error::{ItemTagsError, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a JSON payload is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    Stdin,
    File(PathBuf),
}

impl PayloadSource {
    /// No argument or `-` means stdin
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => PayloadSource::File(path.to_path_buf()),
            _ => PayloadSource::Stdin,
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            PayloadSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            PayloadSource::File(path) => fs::read_to_string(path).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ItemTagsError::InputNotFound(path.clone())
                } else {
                    ItemTagsError::Io(e)
                }
            }),
        }
    }

    /// Short label for log lines
    pub fn describe(&self) -> String {
        match self {
            PayloadSource::Stdin => "<stdin>".to_string(),
            PayloadSource::File(path) => path.display().to_string(),
        }
    }
}
