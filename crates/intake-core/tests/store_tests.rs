//! Record store integration tests over a real backing file.

use std::fs;

use intake_core::{LoadSource, RawPatientFields, RecordStore, StoreError};

fn raw(first: &str, last: &str, dob: &str, phone: &str) -> RawPatientFields {
    RawPatientFields {
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: dob.to_string(),
        phone_number: phone.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_add_then_find_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecordStore::open(dir.path().join("patients.json"));

    let record = store
        .add(&raw("Ann", "Lee", "1990-05-01", "555-1234"))
        .unwrap();

    let found = store.find_by_id(&record.patient_id).unwrap();
    assert_eq!(found.last_name, "Lee");
}

#[test]
fn test_invalid_add_reports_both_errors_and_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");

    let mut store = RecordStore::open(&path);
    store
        .add(&raw("Bob", "Ray", "1985-01-15", "555-0000"))
        .unwrap();

    let err = store
        .add(&raw("", "Lee", "bad-date", "555-1234"))
        .unwrap_err();
    let errors = match err {
        StoreError::Validation(errors) => errors,
        other => panic!("expected validation error, got {:?}", other),
    };
    assert!(errors.iter().any(|e| e.contains("First Name")));
    assert!(errors.iter().any(|e| e.contains("YYYY-MM-DD")));

    assert_eq!(store.len(), 1);
    assert_eq!(RecordStore::open(&path).len(), 1);
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");

    let mut store = RecordStore::open(&path);
    store
        .add(&raw("Ann", "Lee", "1990-05-01", "555-1234"))
        .unwrap();
    store
        .add(&raw("Bob", "Ray", "1985-01-15", "555-0000"))
        .unwrap();

    let reopened = RecordStore::open(&path);
    assert_eq!(reopened.source(), LoadSource::File);
    assert_eq!(reopened.records(), store.records());
}

#[test]
fn test_missing_and_corrupt_files_both_load_empty() {
    let dir = tempfile::tempdir().unwrap();

    let missing = RecordStore::open(dir.path().join("absent.json"));
    assert!(missing.is_empty());
    assert_eq!(missing.source(), LoadSource::Missing);

    let path = dir.path().join("garbled.json");
    fs::write(&path, "not json").unwrap();
    let corrupt = RecordStore::open(&path);
    assert!(corrupt.is_empty());
    assert_eq!(corrupt.source(), LoadSource::Corrupt);
}

#[test]
fn test_corrupt_load_then_save_replaces_file() {
    // The lossy-load policy means a save after a corrupt load clobbers
    // whatever was in the file. That is the intended last-write-wins story.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");
    fs::write(&path, "{{{{").unwrap();

    let mut store = RecordStore::open(&path);
    assert_eq!(store.source(), LoadSource::Corrupt);
    store
        .add(&raw("Ann", "Lee", "1990-05-01", "555-1234"))
        .unwrap();

    let reopened = RecordStore::open(&path);
    assert_eq!(reopened.source(), LoadSource::File);
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_find_on_empty_store_misses() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::open(dir.path().join("patients.json"));
    for id in ["000000", "999999", "", "abc"] {
        assert!(store.find_by_id(id).is_none());
    }
}

#[test]
fn test_on_disk_shape_is_eight_string_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");

    let mut store = RecordStore::open(&path);
    store
        .add(&raw("Ann", "Lee", "1990-05-01", "555-1234"))
        .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 1);

    let object = array[0].as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "address",
            "date_of_birth",
            "first_name",
            "last_name",
            "notes",
            "patient_id",
            "phone_number",
            "reason_for_visit",
        ]
    );
    assert!(object.values().all(|v| v.is_string()));
}

#[test]
fn test_ids_unique_across_many_adds() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecordStore::open(dir.path().join("patients.json"));

    for i in 0..50 {
        store
            .add(&raw("Ann", "Lee", "1990-05-01", &format!("555-{:04}", i)))
            .unwrap();
    }

    let ids: std::collections::HashSet<_> =
        store.records().iter().map(|r| r.patient_id.clone()).collect();
    assert_eq!(ids.len(), 50);
}
