//! Integration tests for the gradebook store

use gradebook::core::models::Course;
use gradebook::core::store::{CourseUpdate, Gradebook, StoreError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn course(code: &str, credits: u32, semester: u32, score: f64) -> Course {
    Course::new(
        code.to_string(),
        format!("{code} course"),
        credits,
        semester,
        score,
    )
}

/// Helper to create a gradebook bound to a file inside a temp directory
fn temp_gradebook() -> (TempDir, PathBuf, Gradebook) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gradebook.json");
    let gradebook = Gradebook::load(&path);
    (temp_dir, path, gradebook)
}

#[test]
fn test_absent_file_yields_empty_set() {
    let (_temp_dir, _path, gradebook) = temp_gradebook();

    assert!(gradebook.is_empty());
    assert_eq!(gradebook.len(), 0);
}

#[test]
fn test_corrupt_file_yields_empty_set() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gradebook.json");
    fs::write(&path, "{ not valid json ]").expect("Failed to write corrupt file");

    let gradebook = Gradebook::load(&path);

    assert!(gradebook.is_empty(), "Corrupt file should load as empty");
}

#[test]
fn test_add_persists_record() {
    let (_temp_dir, path, mut gradebook) = temp_gradebook();

    gradebook
        .add(course("CS1800", 4, 1, 8.0))
        .expect("Add should succeed");

    assert!(path.exists(), "Gradebook file should exist after add");
    let reloaded = Gradebook::load(&path);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.courses()[0].code, "CS1800");
}

#[test]
fn test_add_rejects_duplicate_code() {
    let (_temp_dir, path, mut gradebook) = temp_gradebook();

    gradebook
        .add(course("CS1800", 4, 1, 8.0))
        .expect("First add should succeed");
    let result = gradebook.add(course("CS1800", 2, 3, 5.0));

    assert!(matches!(result, Err(StoreError::Duplicate(_))));
    assert_eq!(gradebook.len(), 1, "Duplicate add must not mutate the set");

    // The persisted file must still hold the original record
    let reloaded = Gradebook::load(&path);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.courses()[0].credits, 4);
    assert_eq!(reloaded.courses()[0].semester, 1);
}

#[test]
fn test_sparse_update_changes_only_given_fields() {
    let (_temp_dir, path, mut gradebook) = temp_gradebook();
    gradebook
        .add(course("CS2510", 4, 2, 6.5))
        .expect("Add should succeed");

    let update = CourseUpdate {
        score: Some(9.0),
        ..Default::default()
    };
    gradebook
        .update("CS2510", &update)
        .expect("Update should succeed");

    let reloaded = Gradebook::load(&path);
    let updated = reloaded.find("CS2510").expect("Record should still exist");
    assert_eq!(updated.name, "CS2510 course");
    assert_eq!(updated.credits, 4);
    assert_eq!(updated.semester, 2);
    assert!((updated.score - 9.0).abs() < f64::EPSILON);
}

#[test]
fn test_update_missing_code_fails_without_persist() {
    let (_temp_dir, path, mut gradebook) = temp_gradebook();

    let update = CourseUpdate {
        credits: Some(3),
        ..Default::default()
    };
    let result = gradebook.update("CS0000", &update);

    assert!(matches!(result, Err(StoreError::NotFound(_))));
    assert!(
        !path.exists(),
        "Failed update on an empty book must not create the file"
    );
}

#[test]
fn test_delete_removes_record() {
    let (_temp_dir, path, mut gradebook) = temp_gradebook();
    gradebook
        .add(course("CS1800", 4, 1, 8.0))
        .expect("Add should succeed");
    gradebook
        .add(course("CS2510", 4, 2, 7.0))
        .expect("Add should succeed");

    gradebook.delete("CS1800").expect("Delete should succeed");

    assert_eq!(gradebook.len(), 1);
    assert!(gradebook.find("CS1800").is_none());

    let reloaded = Gradebook::load(&path);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.courses()[0].code, "CS2510");
}

#[test]
fn test_delete_missing_code_leaves_set_unchanged() {
    let (_temp_dir, _path, mut gradebook) = temp_gradebook();
    gradebook
        .add(course("CS1800", 4, 1, 8.0))
        .expect("Add should succeed");

    let result = gradebook.delete("CS9999");

    assert!(matches!(result, Err(StoreError::NotFound(_))));
    assert_eq!(gradebook.len(), 1);
    assert_eq!(gradebook.courses()[0].code, "CS1800");
}

#[test]
fn test_round_trip_preserves_records_and_order() {
    let (_temp_dir, path, mut gradebook) = temp_gradebook();
    let records = vec![
        course("CS1800", 4, 1, 8.0),
        course("MATH1341", 4, 1, 7.25),
        course("CS2510", 4, 2, 9.0),
    ];
    for record in &records {
        gradebook
            .add(record.clone())
            .expect("Add should succeed");
    }

    let reloaded = Gradebook::load(&path);

    assert_eq!(reloaded.courses(), &records[..]);
}

#[test]
fn test_save_leaves_no_temp_file_behind() {
    let (temp_dir, path, mut gradebook) = temp_gradebook();
    gradebook
        .add(course("CS1800", 4, 1, 8.0))
        .expect("Add should succeed");

    let entries: Vec<_> = fs::read_dir(temp_dir.path())
        .expect("Failed to read temp dir")
        .map(|e| e.expect("Failed to read entry").path())
        .collect();

    assert_eq!(entries, vec![path]);
}

#[test]
fn test_persisted_file_is_pretty_printed_json() {
    let (_temp_dir, path, mut gradebook) = temp_gradebook();
    gradebook
        .add(course("CS1800", 4, 1, 8.0))
        .expect("Add should succeed");

    let content = fs::read_to_string(&path).expect("Failed to read gradebook file");

    assert!(
        content.contains('\n'),
        "Gradebook file should be human-readable (indented)"
    );
    assert!(content.contains("\"code\""));
    assert!(content.contains("\"credits\""));
    assert!(content.contains("\"semester\""));
    assert!(content.contains("\"score\""));
}
