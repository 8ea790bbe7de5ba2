//! Serde model of the journal backup document
//!
//! Field defaults declared here are the single place optional fields are
//! filled in; consumers never re-default. Every record carries a flattened
//! extra map so fields this tool does not understand survive a merge
//! round-trip untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A mood definition from the backup's `customMoods` list.
///
/// Moods are read-only in this tool; the merge copies them through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub id: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MoodRecord {
    /// Display name: `custom_name` when non-empty, else `name`.
    /// Returns `None` when both are empty or absent.
    pub fn display_name(&self) -> Option<&str> {
        self.custom_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.name.as_deref().filter(|n| !n.is_empty()))
    }
}

/// A tag definition from the backup's `tags` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    pub id: u32,
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TagRecord {
    /// A tag as the importer creates it: id and name only.
    pub fn new(id: u32, name: String) -> Self {
        TagRecord {
            id,
            name,
            extra: Map::new(),
        }
    }
}

/// One raw journal entry from the backup's `dayEntries` list.
///
/// The `year`..`minute` fields are the entry's local time components, stored
/// verbatim alongside the UTC timestamp for fidelity. `month` is zero-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: u32,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,

    /// Milliseconds since epoch, UTC.
    pub datetime: i64,

    /// Milliseconds, may be negative.
    #[serde(rename = "timeZoneOffset")]
    pub time_zone_offset: i64,

    /// Foreign key into the mood table.
    pub mood: u32,

    #[serde(default)]
    pub note: String,

    #[serde(default)]
    pub note_title: String,

    /// Foreign keys into the tag table.
    #[serde(default)]
    pub tags: Vec<u32>,

    /// Opaque, passed through unmodified.
    #[serde(default)]
    pub assets: Vec<Value>,

    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The journal backup document.
///
/// The merge replaces exactly `dayEntries`, `tags` and `customMoods`; every
/// other top-level field (known or not) passes through as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(
        rename = "isReminderOn",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_reminder_on: Option<bool>,

    #[serde(rename = "customMoods", default)]
    pub custom_moods: Vec<MoodRecord>,

    #[serde(default)]
    pub tags: Vec<TagRecord>,

    #[serde(rename = "dayEntries", default)]
    pub day_entries: Vec<EntryRecord>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
