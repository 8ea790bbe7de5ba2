//! Domain layer - Journal data model and resolution logic

pub mod document;
pub mod entry;
pub mod journal;
pub mod moods;
pub mod tags;

pub use document::{EntryRecord, JournalDocument, MoodRecord, TagRecord};
pub use entry::EntryView;
pub use journal::JournalModel;
pub use moods::{FixedMoodResolver, MoodResolver, NameMoodResolver};
pub use tags::{normalize_tag_name, TagAllocator};
