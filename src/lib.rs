//! moodmerge - Merge mood check-in exports into a journal backup
//!
//! Reads a journal backup (JSON) and a check-in export (CSV), converts the
//! check-ins into the backup's entry schema, and writes one merged backup.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MergeError;
