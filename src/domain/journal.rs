//! In-memory journal aggregate
//!
//! Moods and tags are held in id-keyed tables so entries can resolve their
//! foreign keys to display names. Unresolvable ids never fail, they render
//! as placeholder strings.

use crate::domain::document::{EntryRecord, JournalDocument, MoodRecord, TagRecord};
use crate::domain::entry::EntryView;
use std::collections::{BTreeMap, BTreeSet};

/// The journal backup loaded into lookup form.
#[derive(Debug, Clone)]
pub struct JournalModel {
    pub version: Option<String>,
    pub is_reminder_on: bool,
    moods: BTreeMap<u32, MoodRecord>,
    tags: BTreeMap<u32, TagRecord>,
    entries: Vec<EntryRecord>,
}

impl JournalModel {
    /// Build the model from a decoded backup document.
    ///
    /// No semantic validation happens here; dangling mood/tag references
    /// surface later as placeholder names.
    pub fn new(document: &JournalDocument) -> Self {
        let moods = document
            .custom_moods
            .iter()
            .map(|m| (m.id, m.clone()))
            .collect();
        let tags = document.tags.iter().map(|t| (t.id, t.clone())).collect();

        JournalModel {
            version: document.version.clone(),
            is_reminder_on: document.is_reminder_on.unwrap_or(false),
            moods,
            tags,
            entries: document.day_entries.clone(),
        }
    }

    /// Resolve a mood id to its display name.
    pub fn mood_name(&self, mood_id: u32) -> String {
        self.moods
            .get(&mood_id)
            .and_then(|m| m.display_name())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Unknown Mood ID ({})", mood_id))
    }

    /// Resolve a tag id to its display name.
    pub fn tag_name(&self, tag_id: u32) -> String {
        self.tags
            .get(&tag_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Unknown Tag ID ({})", tag_id))
    }

    /// Iterate entries as views that can resolve names through this model.
    pub fn entries(&self) -> impl Iterator<Item = EntryView<'_>> {
        self.entries.iter().map(move |record| EntryView::new(record, self))
    }

    /// Entries whose resolved mood name matches (case-insensitive).
    pub fn entries_with_mood(&self, mood_name: &str) -> Vec<EntryView<'_>> {
        let wanted = mood_name.to_lowercase();
        self.entries()
            .filter(|e| e.mood_name().to_lowercase() == wanted)
            .collect()
    }

    /// Entries carrying a tag whose resolved name matches (case-insensitive).
    pub fn entries_with_tag(&self, tag_name: &str) -> Vec<EntryView<'_>> {
        let wanted = tag_name.to_lowercase();
        self.entries()
            .filter(|e| {
                e.tag_names()
                    .iter()
                    .any(|name| name.to_lowercase() == wanted)
            })
            .collect()
    }

    /// Unique mood display names.
    pub fn mood_names(&self) -> BTreeSet<String> {
        self.moods.keys().map(|&id| self.mood_name(id)).collect()
    }

    /// Unique tag display names.
    pub fn tag_names(&self) -> BTreeSet<String> {
        self.tags.keys().map(|&id| self.tag_name(id)).collect()
    }

    /// The tag table, in id order.
    pub fn tags(&self) -> impl Iterator<Item = &TagRecord> {
        self.tags.values()
    }

    /// Largest tag id currently in the table, 0 when the table is empty.
    pub fn max_tag_id(&self) -> u32 {
        self.tags.keys().next_back().copied().unwrap_or(0)
    }

    /// Append a tag the importer discovered. Ids are assigned by the caller
    /// and never reused.
    pub fn insert_tag(&mut self, tag: TagRecord) {
        self.tags.insert(tag.id, tag);
    }

    /// Tag records for the output document, in id order.
    pub fn tag_records(&self) -> Vec<TagRecord> {
        self.tags.values().cloned().collect()
    }

    /// Mood records for the output document, in id order. The importer never
    /// adds moods, so this is the input set.
    pub fn mood_records(&self) -> Vec<MoodRecord> {
        self.moods.values().cloned().collect()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn mood_count(&self) -> usize {
        self.moods.len()
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}
