//! Error types for itemtags

use crate::application::dtos::ValidationErrors;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for itemtags
#[derive(Debug, Error)]
pub enum ItemTagsError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Unknown schema: {0}")]
    UnknownSchema(String),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ItemTagsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ItemTagsError::Validation(_) => 2,
            ItemTagsError::UnknownSchema(_) => 3,
            ItemTagsError::Json(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ItemTagsError::Validation(errors) => {
                let mut out = format!("{}", errors);
                for error in &errors.errors {
                    out.push_str(&format!("\n  • {}", error));
                }
                out
            }
            ItemTagsError::UnknownSchema(name) => {
                format!(
                    "Unknown schema: '{}'\n\n\
                    Valid schemas:\n\
                    • item, item-create, item-update\n\
                    • tag, tag-create, tag-update\n\n\
                    Run 'itemtags schemas' for descriptions",
                    name
                )
            }
            ItemTagsError::Json(err) => {
                format!(
                    "Malformed JSON: {}\n\n\
                    Suggestions:\n\
                    • Check for trailing commas and unquoted keys\n\
                    • Pass the payload as a file: itemtags validate tag-create payload.json",
                    err
                )
            }
            ItemTagsError::InputNotFound(path) => {
                format!(
                    "Input file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path\n\
                    • Omit the file argument or pass '-' to read from stdin",
                    path.display()
                )
            }
            ItemTagsError::Config(msg) => {
                if msg.contains("Invalid output") {
                    format!(
                        "{}\n\n\
                        Valid output styles: pretty, compact\n\
                        Example: itemtags config output compact",
                        msg
                    )
                } else if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: itemtags config log_level debug",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ItemTagsError
pub type Result<T> = std::result::Result<T, ItemTagsError>;
