//! Output formatting utilities

use crate::application::MergeSummary;
use crate::domain::EntryView;

/// Format the counts reported after a merge.
pub fn format_merge_summary(summary: &MergeSummary) -> String {
    let mut output = format!(
        "Merged {} existing and {} imported entries ({} total)",
        summary.existing_entries,
        summary.imported_entries,
        summary.total_entries()
    );

    if summary.new_tags > 0 {
        output.push_str(&format!("\nNew tags created: {}", summary.new_tags));
    }
    if summary.skipped_rows > 0 {
        output.push_str(&format!("\nRows skipped: {}", summary.skipped_rows));
    }

    output
}

/// Format a list of display names, one per line.
pub fn format_name_list(names: &[String], empty_message: &str) -> String {
    if names.is_empty() {
        return empty_message.to_string();
    }

    let mut output = String::new();
    for name in names {
        output.push_str(name);
        output.push('\n');
    }
    output
}

/// Format a list of entries for display.
pub fn format_entry_list(entries: &[EntryView<'_>]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let when = entry
            .local_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "<invalid time>".to_string());

        output.push_str(&format!("{}  {}", when, entry.mood_name()));

        let tags = entry.tag_names();
        if !tags.is_empty() {
            output.push_str(&format!("  [{}]", tags.join(", ")));
        }
        output.push('\n');

        if entry.has_note() {
            for line in entry.note_text().lines() {
                output.push_str(&format!("    {}\n", line));
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JournalDocument, JournalModel};
    use serde_json::json;

    #[test]
    fn test_format_summary_plain() {
        let summary = MergeSummary {
            existing_entries: 2,
            imported_entries: 1,
            skipped_rows: 0,
            new_tags: 0,
        };
        assert_eq!(
            format_merge_summary(&summary),
            "Merged 2 existing and 1 imported entries (3 total)"
        );
    }

    #[test]
    fn test_format_summary_with_tags_and_skips() {
        let summary = MergeSummary {
            existing_entries: 0,
            imported_entries: 4,
            skipped_rows: 1,
            new_tags: 3,
        };
        let output = format_merge_summary(&summary);
        assert!(output.contains("(4 total)"));
        assert!(output.contains("New tags created: 3"));
        assert!(output.contains("Rows skipped: 1"));
    }

    #[test]
    fn test_format_empty_name_list() {
        let output = format_name_list(&[], "No tags found");
        assert_eq!(output, "No tags found");
    }

    #[test]
    fn test_format_name_list() {
        let names = vec!["friends".to_string(), "work".to_string()];
        assert_eq!(format_name_list(&names, "No tags found"), "friends\nwork\n");
    }

    #[test]
    fn test_format_empty_entry_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let doc: JournalDocument = serde_json::from_value(json!({
            "customMoods": [{"id": 2, "name": "good"}],
            "tags": [{"id": 10, "name": "work"}],
            "dayEntries": [{
                "id": 1, "year": 2025, "month": 9, "day": 4,
                "hour": 20, "minute": 9,
                "datetime": 1759601340000i64, "timeZoneOffset": 7200000,
                "mood": 2, "tags": [10], "note": "long day"
            }]
        }))
        .unwrap();
        let model = JournalModel::new(&doc);
        let entries: Vec<_> = model.entries().collect();

        let output = format_entry_list(&entries);
        assert!(output.contains("2025-10-04 16:09  good  [work]"));
        assert!(output.contains("    long day"));
    }
}
