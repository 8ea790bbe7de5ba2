//! Mood resolution for imported check-ins
//!
//! The check-in export names moods as free text while the journal references
//! them by id. The reference behavior assigns one fixed id to every imported
//! row; `MoodResolver` is the seam for swapping in a real mapping.

use crate::domain::journal::JournalModel;

/// Maps a check-in row's mood text to a journal mood id.
pub trait MoodResolver {
    fn resolve(&self, mood_text: &str, journal: &JournalModel) -> u32;
}

/// Assigns the same mood id to every row, ignoring the mood text.
#[derive(Debug, Clone, Copy)]
pub struct FixedMoodResolver {
    pub mood_id: u32,
}

impl Default for FixedMoodResolver {
    fn default() -> Self {
        FixedMoodResolver { mood_id: 1 }
    }
}

impl MoodResolver for FixedMoodResolver {
    fn resolve(&self, _mood_text: &str, _journal: &JournalModel) -> u32 {
        self.mood_id
    }
}

/// Looks the mood text up among the journal's mood display names
/// (case-insensitive); falls back to a fixed id when there is no match.
#[derive(Debug, Clone, Copy)]
pub struct NameMoodResolver {
    pub fallback_id: u32,
}

impl MoodResolver for NameMoodResolver {
    fn resolve(&self, mood_text: &str, journal: &JournalModel) -> u32 {
        let wanted = mood_text.trim().to_lowercase();
        journal
            .mood_records()
            .iter()
            .find(|mood| journal.mood_name(mood.id).to_lowercase() == wanted)
            .map(|mood| mood.id)
            .unwrap_or(self.fallback_id)
    }
}
