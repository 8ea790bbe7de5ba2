use clap::Parser;
use moodmerge::application::{ImportOptions, MergeService};
use moodmerge::cli::{format_entry_list, format_merge_summary, format_name_list, Cli, Commands};
use moodmerge::domain::{FixedMoodResolver, JournalModel};
use moodmerge::error::MergeError;
use moodmerge::infrastructure::{store, MergeConfig};
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MergeError> {
    match cli.command {
        Commands::Merge {
            journal,
            csv,
            output,
            config,
            utc_offset_hours,
            fallback_mood,
        } => {
            // Config file first, then flag overrides
            let mut merge_config = match config {
                Some(path) => MergeConfig::load_from_path(&path)?,
                None => MergeConfig::default(),
            };
            if let Some(hours) = utc_offset_hours {
                merge_config.source_utc_offset_hours = hours;
            }
            if let Some(mood_id) = fallback_mood {
                merge_config.fallback_mood_id = mood_id;
            }

            let options = ImportOptions {
                source_utc_offset_ms: merge_config.source_utc_offset_ms(),
                mood_resolver: Box::new(FixedMoodResolver {
                    mood_id: merge_config.fallback_mood_id,
                }),
            };

            let summary = MergeService::new(options).execute(&journal, &csv, &output)?;
            println!("{}", format_merge_summary(&summary));
            Ok(())
        }
        Commands::Tags { journal } => {
            let model = load_model(&journal)?;
            let names: Vec<String> = model.tag_names().into_iter().collect();
            println!("{}", format_name_list(&names, "No tags found").trim_end());
            Ok(())
        }
        Commands::Moods { journal } => {
            let model = load_model(&journal)?;
            let names: Vec<String> = model.mood_names().into_iter().collect();
            println!("{}", format_name_list(&names, "No moods found").trim_end());
            Ok(())
        }
        Commands::Entries { journal, mood, tag } => {
            let model = load_model(&journal)?;

            let entries = match (mood.as_deref(), tag.as_deref()) {
                (Some(mood_name), Some(tag_name)) => {
                    let wanted = tag_name.to_lowercase();
                    let mut hits = model.entries_with_mood(mood_name);
                    hits.retain(|e| {
                        e.tag_names().iter().any(|name| name.to_lowercase() == wanted)
                    });
                    hits
                }
                (Some(mood_name), None) => model.entries_with_mood(mood_name),
                (None, Some(tag_name)) => model.entries_with_tag(tag_name),
                (None, None) => model.entries().collect(),
            };

            println!("{}", format_entry_list(&entries).trim_end());
            Ok(())
        }
    }
}

fn load_model(path: &Path) -> Result<JournalModel, MergeError> {
    let document = store::load_document(path)?;
    Ok(JournalModel::new(&document))
}
