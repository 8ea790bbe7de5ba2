//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodmerge")]
#[command(about = "Merge mood check-in CSV exports into a journal backup", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge a check-in CSV export into a journal backup
    Merge {
        /// Journal backup JSON file
        journal: PathBuf,

        /// Check-in CSV export file
        csv: PathBuf,

        /// Where to write the merged backup
        output: PathBuf,

        /// TOML file with import settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// UTC offset (hours) the export's local times are written in
        #[arg(long, value_name = "HOURS", allow_hyphen_values = true)]
        utc_offset_hours: Option<i64>,

        /// Mood id assigned to imported entries
        #[arg(long, value_name = "ID")]
        fallback_mood: Option<u32>,
    },

    /// List the unique tag names in a journal backup
    Tags {
        /// Journal backup JSON file
        journal: PathBuf,
    },

    /// List the unique mood names in a journal backup
    Moods {
        /// Journal backup JSON file
        journal: PathBuf,
    },

    /// List entries, optionally filtered by mood or tag name
    Entries {
        /// Journal backup JSON file
        journal: PathBuf,

        /// Only entries with this mood (case-insensitive)
        #[arg(short, long)]
        mood: Option<String>,

        /// Only entries carrying this tag (case-insensitive)
        #[arg(short, long)]
        tag: Option<String>,
    },
}
