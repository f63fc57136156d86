//! Integration tests for mapping table loading.

use remap_map::{MappingLoadError, load_mapping};
use remap_model::{RowTable, TabularSource};

fn source(rows: &[&[&str]]) -> RowTable {
    RowTable::from_rows("mapping.csv", rows.iter().map(|row| row.iter().copied()))
}

fn pairs(table: &remap_model::MappingTable) -> Vec<(String, String)> {
    table
        .iter()
        .map(|e| (e.find.clone(), e.replace.clone()))
        .collect()
}

#[test]
fn preserves_row_order() {
    let src = source(&[&["find", "replace"], &["a", "1"], &["b", "2"], &["c", "3"]]);
    let table = load_mapping(&src, "find", "replace").expect("load mapping");
    assert_eq!(
        pairs(&table),
        vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
            ("c".to_string(), "3".to_string()),
        ]
    );
}

#[test]
fn loading_twice_is_identical() {
    let src = source(&[&["find", "replace"], &["z", "1"], &["y", ""], &["x", "3"]]);
    let first = load_mapping(&src, "find", "replace").unwrap();
    let second = load_mapping(&src, "find", "replace").unwrap();
    assert_eq!(first, second);
    assert_eq!(pairs(&first), pairs(&second));
}

#[test]
fn selects_columns_by_name() {
    let src = source(&[
        &["note", "to", "from"],
        &["n1", "B", "a"],
        &["n2", "D", "c"],
    ]);
    let table = load_mapping(&src, "from", "to").unwrap();
    assert_eq!(table.get("a"), Some("B"));
    assert_eq!(table.get("c"), Some("D"));
    assert!(!table.contains("n1"));
}

#[test]
fn duplicated_find_values_fail_listing_each_once() {
    let src = source(&[
        &["find", "replace"],
        &["x", "1"],
        &["y", "2"],
        &["x", "2"],
        &["x", "3"],
        &["y", "4"],
    ]);
    let err = load_mapping(&src, "find", "replace").unwrap_err();
    match err {
        MappingLoadError::DuplicatedFindValue { values, .. } => {
            assert_eq!(values, vec!["x", "y"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicated_find_message_is_quoted() {
    let src = source(&[&["find", "replace"], &["x", "1"], &["x", "2"]]);
    let err = load_mapping(&src, "find", "replace").unwrap_err();
    assert_eq!(
        err.to_string(),
        "duplicated values in find strings of mapping.csv: \"x\""
    );
}

#[test]
fn blank_find_value_fails() {
    let src = source(&[&["find", "replace"], &["a", "1"], &["", "2"]]);
    let err = load_mapping(&src, "find", "replace").unwrap_err();
    assert!(matches!(err, MappingLoadError::BlankFindValue { .. }));
}

#[test]
fn all_blank_full_width_row_is_a_blank_find() {
    let src = source(&[&["find", "replace"], &["a", "1"], &["", ""]]);
    let err = load_mapping(&src, "find", "replace").unwrap_err();
    assert!(matches!(err, MappingLoadError::BlankFindValue { .. }));
}

#[test]
fn duplicates_reported_before_blank_find() {
    let src = source(&[&["find", "replace"], &["", "1"], &["", "2"]]);
    let err = load_mapping(&src, "find", "replace").unwrap_err();
    match err {
        MappingLoadError::DuplicatedFindValue { values, .. } => assert_eq!(values, vec![""]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn broken_rows_are_all_listed() {
    let src = source(&[
        &["a", "b", "c"],
        &["1", "2", "3"],
        &["1", "2"],
        &[],
        &["1", "2", "3", "4"],
    ]);
    let err = load_mapping(&src, "a", "b").unwrap_err();
    match err {
        MappingLoadError::BrokenRow {
            expected, lines, ..
        } => {
            assert_eq!(expected, 3);
            assert_eq!(lines, vec![3, 5]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_rows_are_not_broken() {
    let src = source(&[&["a", "b", "c"], &[], &["1", "2", "3"], &[]]);
    let table = load_mapping(&src, "a", "b").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("1"), Some("2"));
}

#[test]
fn missing_columns_listed_together() {
    let src = source(&[&["x", "y"], &["1", "2"]]);
    let err = load_mapping(&src, "find", "replace").unwrap_err();
    match err {
        MappingLoadError::MissingColumn { columns, .. } => {
            assert_eq!(columns, vec!["find", "replace"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_find_column_only() {
    let src = source(&[&["x", "replace"], &["1", "2"]]);
    let err = load_mapping(&src, "find", "replace").unwrap_err();
    match err {
        MappingLoadError::MissingColumn { columns, .. } => assert_eq!(columns, vec!["find"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_columns_take_priority_over_broken_rows() {
    let src = source(&[&["x", "y"], &["1"]]);
    let err = load_mapping(&src, "find", "y").unwrap_err();
    assert!(matches!(err, MappingLoadError::MissingColumn { .. }));
}

#[test]
fn duplicated_columns_take_priority_over_broken_rows() {
    let src = source(&[&["find", "find", "replace"], &["1"]]);
    let err = load_mapping(&src, "find", "replace").unwrap_err();
    match err {
        MappingLoadError::DuplicatedColumn { columns, .. } => assert_eq!(columns, vec!["find"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicated_columns_listed_together() {
    let src = source(&[&["find", "find", "replace", "replace"], &["a", "b", "c", "d"]]);
    let err = load_mapping(&src, "find", "replace").unwrap_err();
    match err {
        MappingLoadError::DuplicatedColumn { columns, .. } => {
            assert_eq!(columns, vec!["find", "replace"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicated_unrequested_columns_are_ignored() {
    let src = source(&[&["note", "note", "find", "replace"], &["", "", "a", "b"]]);
    let table = load_mapping(&src, "find", "replace").unwrap();
    assert_eq!(table.get("a"), Some("b"));
}

#[test]
fn header_only_is_empty_result_set() {
    let src = source(&[&["find", "replace"], &[]]);
    let err = load_mapping(&src, "find", "replace").unwrap_err();
    assert!(matches!(err, MappingLoadError::EmptyResultSet { .. }));
}

#[test]
fn no_rows_at_all_is_no_header() {
    let src = source(&[]);
    let err = load_mapping(&src, "find", "replace").unwrap_err();
    assert!(matches!(err, MappingLoadError::NoHeaderRow { .. }));
    assert_eq!(err.to_string(), "no columns to parse from mapping.csv");
}

struct FailingSource;

impl TabularSource for FailingSource {
    fn describe(&self) -> String {
        "broken.csv".to_string()
    }

    fn rows(&self) -> std::io::Result<remap_model::RowIter<'_>> {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ))
    }
}

#[test]
fn unreadable_source_is_reported() {
    let err = load_mapping(&FailingSource, "find", "replace").unwrap_err();
    assert!(matches!(err, MappingLoadError::SourceUnreadable { .. }));
    assert_eq!(err.to_string(), "failed to read broken.csv: no such file");
}
