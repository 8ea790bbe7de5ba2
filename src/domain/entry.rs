//! Entry view with derived date/time and note computations
//!
//! An `EntryView` pairs a raw entry record with the journal that owns it.
//! The journal reference is only used to resolve mood/tag ids to names; the
//! view never mutates anything.

use crate::domain::document::EntryRecord;
use crate::domain::journal::JournalModel;
use chrono::{DateTime, Duration, Utc};

/// A journal entry together with its owning journal, for name resolution.
#[derive(Debug, Clone, Copy)]
pub struct EntryView<'a> {
    record: &'a EntryRecord,
    journal: &'a JournalModel,
}

impl<'a> EntryView<'a> {
    pub fn new(record: &'a EntryRecord, journal: &'a JournalModel) -> Self {
        EntryView { record, journal }
    }

    pub fn record(&self) -> &'a EntryRecord {
        self.record
    }

    pub fn id(&self) -> u32 {
        self.record.id
    }

    /// The entry time as a UTC datetime. `None` only for timestamps outside
    /// the representable range.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.record.datetime)
    }

    /// The time zone offset as a duration.
    pub fn tz_offset(&self) -> Duration {
        Duration::milliseconds(self.record.time_zone_offset)
    }

    /// The datetime adjusted to the local time of the entry.
    pub fn local_datetime(&self) -> Option<DateTime<Utc>> {
        self.timestamp_utc().map(|utc| utc - self.tz_offset())
    }

    /// Resolved mood display name.
    pub fn mood_name(&self) -> String {
        self.journal.mood_name(self.record.mood)
    }

    /// Resolved tag display names, in the entry's tag order.
    pub fn tag_names(&self) -> Vec<String> {
        self.record
            .tags
            .iter()
            .map(|&tag_id| self.journal.tag_name(tag_id))
            .collect()
    }

    /// Whether the entry carries any non-blank note content.
    pub fn has_note(&self) -> bool {
        !self.record.note.trim().is_empty() || !self.record.note_title.trim().is_empty()
    }

    /// Title and body combined into a single readable string.
    pub fn note_text(&self) -> String {
        let title = self.record.note_title.trim();
        let body = self.record.note.trim();

        if !title.is_empty() && !body.is_empty() {
            format!("[{}]\n{}", title, body)
        } else if !title.is_empty() {
            format!("[{}]", title)
        } else {
            body.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::JournalDocument;
    use serde_json::json;

    fn model_with_entry(entry: serde_json::Value) -> JournalModel {
        let doc: JournalDocument = serde_json::from_value(json!({
            "customMoods": [{"id": 2, "name": "good"}],
            "tags": [{"id": 10, "name": "work"}],
            "dayEntries": [entry]
        }))
        .unwrap();
        JournalModel::new(&doc)
    }

    fn base_entry() -> serde_json::Value {
        json!({
            "id": 1, "year": 2025, "month": 9, "day": 4,
            "hour": 20, "minute": 9,
            // 2025-10-04T18:09:00Z
            "datetime": 1759601340000i64,
            "timeZoneOffset": 7200000,
            "mood": 2, "tags": [10, 42]
        })
    }

    #[test]
    fn timestamp_utc_reads_epoch_millis() {
        let model = model_with_entry(base_entry());
        let entry = model.entries().next().unwrap();
        let utc = entry.timestamp_utc().unwrap();
        assert_eq!(utc.to_rfc3339(), "2025-10-04T18:09:00+00:00");
    }

    #[test]
    fn local_datetime_subtracts_offset() {
        let model = model_with_entry(base_entry());
        let entry = model.entries().next().unwrap();
        let local = entry.local_datetime().unwrap();
        assert_eq!(local.to_rfc3339(), "2025-10-04T16:09:00+00:00");
    }

    #[test]
    fn negative_offset_shifts_forward() {
        let mut raw = base_entry();
        raw["timeZoneOffset"] = json!(-3600000);
        let model = model_with_entry(raw);
        let entry = model.entries().next().unwrap();
        let local = entry.local_datetime().unwrap();
        assert_eq!(local.to_rfc3339(), "2025-10-04T19:09:00+00:00");
    }

    #[test]
    fn resolves_mood_and_tag_names_through_journal() {
        let model = model_with_entry(base_entry());
        let entry = model.entries().next().unwrap();
        assert_eq!(entry.mood_name(), "good");
        assert_eq!(
            entry.tag_names(),
            vec!["work".to_string(), "Unknown Tag ID (42)".to_string()]
        );
    }

    #[test]
    fn has_note_ignores_whitespace() {
        let mut raw = base_entry();
        raw["note"] = json!("   ");
        let model = model_with_entry(raw);
        assert!(!model.entries().next().unwrap().has_note());

        let mut raw = base_entry();
        raw["note_title"] = json!("Morning");
        let model = model_with_entry(raw);
        assert!(model.entries().next().unwrap().has_note());
    }

    #[test]
    fn note_text_combines_title_and_body() {
        let mut raw = base_entry();
        raw["note_title"] = json!("Morning");
        raw["note"] = json!("slept well");
        let model = model_with_entry(raw);
        assert_eq!(
            model.entries().next().unwrap().note_text(),
            "[Morning]\nslept well"
        );
    }

    #[test]
    fn note_text_title_only_is_bracketed() {
        let mut raw = base_entry();
        raw["note_title"] = json!("Morning");
        let model = model_with_entry(raw);
        assert_eq!(model.entries().next().unwrap().note_text(), "[Morning]");
    }

    #[test]
    fn note_text_body_only_is_verbatim() {
        let mut raw = base_entry();
        raw["note"] = json!("slept well");
        let model = model_with_entry(raw);
        assert_eq!(model.entries().next().unwrap().note_text(), "slept well");

        let model = model_with_entry(base_entry());
        assert_eq!(model.entries().next().unwrap().note_text(), "");
    }
}
