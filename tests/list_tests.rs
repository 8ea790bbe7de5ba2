//! Integration tests for the tags, moods and entries commands

use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

mod common;
use common::moodmerge_cmd;

fn write_journal(dir: &Path) -> PathBuf {
    let value = json!({
        "version": "15",
        "customMoods": [
            {"id": 1, "name": "rad"},
            {"id": 2, "name": "good", "custom_name": "Content"}
        ],
        "tags": [
            {"id": 1, "name": "work"},
            {"id": 2, "name": "friends"}
        ],
        "dayEntries": [
            {
                "id": 1, "year": 2025, "month": 8, "day": 30,
                "hour": 9, "minute": 0,
                "datetime": 1759222800000i64, "timeZoneOffset": 7200000,
                "mood": 1, "note": "quiet morning", "tags": [1]
            },
            {
                "id": 2, "year": 2025, "month": 9, "day": 1,
                "hour": 18, "minute": 30,
                "datetime": 1759336200000i64, "timeZoneOffset": 7200000,
                "mood": 2, "note": "evening out", "tags": [1, 2]
            }
        ]
    });

    let path = dir.join("journal.json");
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    path
}

#[test]
fn test_tags_lists_sorted_unique_names() {
    let temp = TempDir::new().unwrap();
    let journal = write_journal(temp.path());

    let output = moodmerge_cmd()
        .arg("tags")
        .arg(&journal)
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["friends", "work"]);
}

#[test]
fn test_moods_lists_display_names() {
    let temp = TempDir::new().unwrap();
    let journal = write_journal(temp.path());

    let output = moodmerge_cmd()
        .arg("moods")
        .arg(&journal)
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["Content", "rad"]);
}

#[test]
fn test_tags_empty_journal() {
    let temp = TempDir::new().unwrap();
    let journal = temp.path().join("journal.json");
    fs::write(
        &journal,
        r#"{"customMoods": [], "tags": [], "dayEntries": []}"#,
    )
    .unwrap();

    moodmerge_cmd()
        .arg("tags")
        .arg(&journal)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}

#[test]
fn test_entries_filter_by_mood_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let journal = write_journal(temp.path());

    moodmerge_cmd()
        .arg("entries")
        .arg(&journal)
        .arg("--mood")
        .arg("content")
        .assert()
        .success()
        .stdout(predicate::str::contains("evening out"))
        .stdout(predicate::str::contains("quiet morning").not());
}

#[test]
fn test_entries_filter_by_tag() {
    let temp = TempDir::new().unwrap();
    let journal = write_journal(temp.path());

    moodmerge_cmd()
        .arg("entries")
        .arg(&journal)
        .arg("--tag")
        .arg("FRIENDS")
        .assert()
        .success()
        .stdout(predicate::str::contains("evening out"))
        .stdout(predicate::str::contains("quiet morning").not());
}

#[test]
fn test_entries_unfiltered_lists_everything() {
    let temp = TempDir::new().unwrap();
    let journal = write_journal(temp.path());

    moodmerge_cmd()
        .arg("entries")
        .arg(&journal)
        .assert()
        .success()
        .stdout(predicate::str::contains("quiet morning"))
        .stdout(predicate::str::contains("evening out"))
        .stdout(predicate::str::contains("rad"))
        .stdout(predicate::str::contains("Content"));
}

#[test]
fn test_entries_no_match() {
    let temp = TempDir::new().unwrap();
    let journal = write_journal(temp.path());

    moodmerge_cmd()
        .arg("entries")
        .arg(&journal)
        .arg("--mood")
        .arg("miserable")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_missing_journal_reports_file_not_found() {
    let temp = TempDir::new().unwrap();

    moodmerge_cmd()
        .arg("tags")
        .arg(temp.path().join("absent.json"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("File not found"));
}
