//! Check-in CSV import use case
//!
//! Converts a check-in export into journal entry records. Cells are addressed
//! by header name, so column order in the export does not matter. The journal
//! is mutated in place: tag names never seen before get fresh ids appended to
//! its tag table.

use crate::domain::{
    normalize_tag_name, EntryRecord, FixedMoodResolver, JournalModel, MoodResolver, TagAllocator,
};
use crate::error::{MergeError, Result};
use crate::infrastructure::config::DEFAULT_SOURCE_UTC_OFFSET_MS;
use chrono::{Datelike, Duration, NaiveDateTime, Timelike};
use csv::{ReaderBuilder, StringRecord};
use serde_json::Map;
use std::collections::{BTreeSet, HashMap};

/// Date format used by the check-in export, e.g. "2025 Sat Oct 4 8:09 PM".
const DATE_FORMAT: &str = "%Y %a %b %d %I:%M %p";

/// Columns whose cells contribute tags.
const TAG_COLUMNS: [&str; 9] = [
    "Tags (People)",
    "Tags (Places)",
    "Tags (Events)",
    "Exercise",
    "Sleep",
    "Menstrual",
    "Steps",
    "Meditation",
    "Weather",
];

/// Options for a CSV import run.
pub struct ImportOptions {
    /// Offset (ms) the export's local times are assumed to be written in.
    pub source_utc_offset_ms: i64,

    /// Mood mapping applied to each row's mood text.
    pub mood_resolver: Box<dyn MoodResolver>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        ImportOptions {
            source_utc_offset_ms: DEFAULT_SOURCE_UTC_OFFSET_MS,
            mood_resolver: Box::new(FixedMoodResolver::default()),
        }
    }
}

/// What an import run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    /// Converted entries, ids sequential within this batch (1-based).
    pub entries: Vec<EntryRecord>,

    /// Rows dropped because their date did not parse.
    pub skipped_rows: usize,

    /// Tags created in the journal's tag table during this run.
    pub new_tags: usize,
}

/// Service converting check-in CSV text into journal entry records.
pub struct CsvImportService {
    options: ImportOptions,
}

impl CsvImportService {
    pub fn new(options: ImportOptions) -> Self {
        CsvImportService { options }
    }

    /// Run the import against `csv_text`.
    ///
    /// Rows with an unparseable date are skipped with a diagnostic; rows that
    /// are entirely blank are skipped silently. Any new tag names are inserted
    /// into `journal`'s tag table.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV itself is malformed or the header lacks
    /// the `Date` column.
    pub fn execute(&self, csv_text: &str, journal: &mut JournalModel) -> Result<ImportOutcome> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_text.as_bytes());

        // 1. Header row -> column-name lookup
        let headers = reader.headers()?.clone();
        let columns = column_map(&headers);
        if !columns.contains_key("Date") {
            return Err(MergeError::MissingColumn("Date".to_string()));
        }

        // 2. Reverse tag lookup + next free id
        let mut allocator = TagAllocator::for_journal(journal);

        let mut entries: Vec<EntryRecord> = Vec::new();
        let mut skipped_rows = 0;

        for record in reader.records() {
            let record = record?;

            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            // 3. Date/time parsing
            let date_text = field(&record, &columns, "Date");
            let local = match NaiveDateTime::parse_from_str(date_text, DATE_FORMAT) {
                Ok(dt) => dt,
                Err(e) => {
                    eprintln!("Skipping row with invalid date '{}': {}", date_text, e);
                    skipped_rows += 1;
                    continue;
                }
            };

            // The export's times are local to the configured offset
            let offset = Duration::milliseconds(self.options.source_utc_offset_ms);
            let timestamp_ms = (local - offset).and_utc().timestamp_millis();

            // 4. Tags
            let tags: Vec<u32> = row_tag_names(&record, &columns)
                .iter()
                .map(|name| allocator.intern(journal, name))
                .collect();

            // 5. Mood
            let mood = self
                .options
                .mood_resolver
                .resolve(field(&record, &columns, "Mood"), journal);

            entries.push(EntryRecord {
                id: (entries.len() + 1) as u32,
                year: local.year(),
                month: local.month0(),
                day: local.day(),
                hour: local.hour(),
                minute: local.minute(),
                datetime: timestamp_ms,
                time_zone_offset: self.options.source_utc_offset_ms,
                mood,
                note: field(&record, &columns, "Notes").trim().to_string(),
                note_title: String::new(),
                tags,
                assets: Vec::new(),
                is_favorite: false,
                extra: Map::new(),
            });
        }

        Ok(ImportOutcome {
            entries,
            skipped_rows,
            new_tags: allocator.created(),
        })
    }
}

/// Column-name -> index lookup, names trimmed.
fn column_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.trim().to_string(), index))
        .collect()
}

/// Cell content by column name; empty for unknown columns and short rows.
fn field<'r>(record: &'r StringRecord, columns: &HashMap<String, usize>, name: &str) -> &'r str {
    columns
        .get(name)
        .and_then(|&index| record.get(index))
        .unwrap_or("")
}

/// All normalized tag names contributed by one row, deduplicated.
///
/// A non-empty Menstrual cell counts as the tag itself, whatever the cell
/// says; every other tag column is split on ';'.
fn row_tag_names(record: &StringRecord, columns: &HashMap<String, usize>) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    for column in TAG_COLUMNS {
        let cell = field(record, columns, column);

        if column == "Menstrual" {
            if !cell.is_empty() {
                names.insert(normalize_tag_name("Menstrual"));
            }
        } else {
            for fragment in cell.split(';') {
                let fragment = fragment.trim();
                if !fragment.is_empty() {
                    names.insert(normalize_tag_name(fragment));
                }
            }
        }
    }

    names
}
