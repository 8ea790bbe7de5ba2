//! Tag-name normalization and id allocation

use crate::domain::document::TagRecord;
use crate::domain::journal::JournalModel;
use std::collections::HashMap;

/// Normalize a raw tag name to the journal's canonical form.
///
/// The backup stores tags lower-cased and hyphenated (e.g. "by-myself");
/// spaces and slashes both become hyphens.
pub fn normalize_tag_name(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            ' ' | '/' => '-',
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Allocates tag ids for the importer.
///
/// Holds the reverse name-to-id lookup over the journal's tag table plus the
/// next free id (`max(existing) + 1`). New tags are inserted into the journal
/// as they are named, so ids stay unique across the whole run.
#[derive(Debug)]
pub struct TagAllocator {
    by_name: HashMap<String, u32>,
    next_id: u32,
    created: usize,
}

impl TagAllocator {
    /// Build the allocator from the journal's current tag table.
    pub fn for_journal(journal: &JournalModel) -> Self {
        let by_name = journal
            .tags()
            .map(|tag| (tag.name.clone(), tag.id))
            .collect();

        TagAllocator {
            by_name,
            next_id: journal.max_tag_id() + 1,
            created: 0,
        }
    }

    /// Resolve a normalized tag name to its id, allocating a fresh id and
    /// inserting a new tag into the journal when the name is unknown.
    pub fn intern(&mut self, journal: &mut JournalModel, name: &str) -> u32 {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.created += 1;
        journal.insert_tag(TagRecord::new(id, name.to_string()));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// How many new tags this allocator has created.
    pub fn created(&self) -> usize {
        self.created
    }
}
