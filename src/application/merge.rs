//! Journal merge use case
//!
//! Orchestrates the full workflow: load the backup, import the check-ins,
//! concatenate and renumber entries, write the merged backup.

use crate::application::import_csv::{CsvImportService, ImportOptions};
use crate::domain::JournalModel;
use crate::error::Result;
use crate::infrastructure::store;
use std::path::Path;

/// Counts reported after a successful merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    /// Entries already in the backup.
    pub existing_entries: usize,

    /// Entries converted from the check-in export.
    pub imported_entries: usize,

    /// Check-in rows dropped for unparseable dates.
    pub skipped_rows: usize,

    /// Tags added to the tag table by the import.
    pub new_tags: usize,
}

impl MergeSummary {
    pub fn total_entries(&self) -> usize {
        self.existing_entries + self.imported_entries
    }
}

/// Service merging a check-in export into a journal backup.
pub struct MergeService {
    importer: CsvImportService,
}

impl MergeService {
    pub fn new(import_options: ImportOptions) -> Self {
        MergeService {
            importer: CsvImportService::new(import_options),
        }
    }

    /// Execute the merge.
    ///
    /// Nothing is written unless every step before the final write succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if either input is missing, the backup does not
    /// decode, the CSV is malformed, or the output cannot be written.
    pub fn execute(
        &self,
        journal_path: &Path,
        csv_path: &Path,
        output_path: &Path,
    ) -> Result<MergeSummary> {
        // 1. Load the backup and build the lookup model
        println!("Loading journal backup from: {}", journal_path.display());
        let mut document = store::load_document(journal_path)?;
        let mut journal = JournalModel::new(&document);
        println!(
            "Loaded {} entries, {} moods, {} tags",
            journal.entry_count(),
            journal.mood_count(),
            journal.tag_count()
        );

        // 2. Read the check-in export
        println!("Reading check-in export from: {}", csv_path.display());
        let csv_text = store::read_text(csv_path)?;

        // 3. Convert check-ins; the journal's tag table grows here
        let outcome = self.importer.execute(&csv_text, &mut journal)?;
        println!("Converted {} check-in entries", outcome.entries.len());

        // 4. Existing raw records first, imported records after
        let mut all_entries = document.day_entries;
        let existing_entries = all_entries.len();
        all_entries.extend(outcome.entries);

        // 5. Renumber sequentially across the combined list
        for (index, entry) in all_entries.iter_mut().enumerate() {
            entry.id = (index + 1) as u32;
        }

        // 6. Replace exactly the three merged fields; everything else passes
        //    through from the original document
        document.day_entries = all_entries;
        document.tags = journal.tag_records();
        document.custom_moods = journal.mood_records();

        // 7. Write the merged backup
        println!("Total entries after merge: {}", document.day_entries.len());
        println!("Saving merged journal to: {}", output_path.display());
        store::write_document(output_path, &document)?;

        Ok(MergeSummary {
            existing_entries,
            imported_entries: document.day_entries.len() - existing_entries,
            skipped_rows: outcome.skipped_rows,
            new_tags: outcome.new_tags,
        })
    }
}
