//! Error types for moodmerge

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodmerge application
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid journal document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing CSV column: '{0}'")]
    MissingColumn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl MergeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MergeError::FileNotFound(_) => 2,
            MergeError::Json(_) => 3,
            MergeError::Csv(_) | MergeError::MissingColumn(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MergeError::FileNotFound(path) => {
                format!(
                    "File not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path for typos\n\
                    • The journal backup must be the decompressed .json file, not the archive\n\
                    • Use an absolute path if the file is outside the current directory",
                    path.display()
                )
            }
            MergeError::Json(e) => {
                format!(
                    "Invalid journal document: {}\n\n\
                    Suggestions:\n\
                    • The first input must be a journal backup in JSON form\n\
                    • If the backup is an archive, extract the inner .json file first\n\
                    • Check that the file was not truncated during export",
                    e
                )
            }
            MergeError::MissingColumn(name) => {
                format!(
                    "Missing CSV column: '{}'\n\n\
                    The check-in export header must contain at least:\n\
                    Date, Mood, Notes\n\
                    plus the tag columns (Tags (People), Tags (Places), Tags (Events),\n\
                    Exercise, Sleep, Menstrual, Steps, Meditation, Weather)",
                    name
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MergeError
pub type Result<T> = std::result::Result<T, MergeError>;
