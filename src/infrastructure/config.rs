//! Merge configuration
//!
//! The check-in export carries neither a time zone nor mood ids, so both
//! fall back to fixed values. This file makes those values explicit and
//! overridable instead of buried constants.

use crate::error::{MergeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The export writes local times without any zone marker; assume UTC+2
/// unless configured otherwise.
pub const DEFAULT_SOURCE_UTC_OFFSET_MS: i64 = 2 * 60 * 60 * 1000;

fn default_offset_hours() -> i64 {
    DEFAULT_SOURCE_UTC_OFFSET_MS / (60 * 60 * 1000)
}

fn default_fallback_mood_id() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// UTC offset, in hours, that the check-in export's local times are
    /// assumed to be written in.
    #[serde(default = "default_offset_hours")]
    pub source_utc_offset_hours: i64,

    /// Mood id assigned to imported entries.
    #[serde(default = "default_fallback_mood_id")]
    pub fallback_mood_id: u32,
}

impl Default for MergeConfig {
    fn default() -> Self {
        MergeConfig {
            source_utc_offset_hours: default_offset_hours(),
            fallback_mood_id: default_fallback_mood_id(),
        }
    }
}

impl MergeConfig {
    /// Load config from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MergeError::Config(format!("Config file not found: {}", path.display()))
            } else {
                MergeError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    pub fn source_utc_offset_ms(&self) -> i64 {
        self.source_utc_offset_hours * 60 * 60 * 1000
    }
}
