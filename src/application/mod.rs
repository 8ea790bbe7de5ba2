//! Application layer - Use cases and orchestration

pub mod import_csv;
pub mod merge;

pub use import_csv::{CsvImportService, ImportOptions, ImportOutcome};
pub use merge::{MergeService, MergeSummary};
