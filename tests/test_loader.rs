//! Unit tests for the delimited-file loader

use merit::pipeline::{load_dataset, MISSING_TOKEN};

#[path = "common/mod.rs"]
mod common;

use common::create_temp_file;

#[test]
fn loads_csv_with_header() {
    let (_tmp, path) = create_temp_file("class,age,irradiat\nyes,30-39,no\nno,40-49,yes\n");

    let data = load_dataset(&path, b',', true, None).unwrap();

    assert_eq!(data.attributes(), &["class", "age", "irradiat"]);
    assert_eq!(data.len(), 2);
    assert_eq!(data.column("age").unwrap(), &["30-39", "40-49"]);
}

#[test]
fn loads_headerless_file_with_supplied_columns() {
    let (_tmp, path) = create_temp_file("yes,30-39,no\nno,40-49,yes\n");
    let columns = vec![
        "class".to_string(),
        "age".to_string(),
        "irradiat".to_string(),
    ];

    let data = load_dataset(&path, b',', false, Some(&columns)).unwrap();

    assert_eq!(data.attributes(), columns.as_slice());
    assert_eq!(data.len(), 2);
    assert_eq!(data.column("class").unwrap(), &["yes", "no"]);
}

#[test]
fn headerless_file_without_columns_is_an_error() {
    let (_tmp, path) = create_temp_file("yes,30-39,no\n");

    let err = load_dataset(&path, b',', false, None).unwrap_err();
    assert!(err.to_string().contains("--columns"));
}

#[test]
fn headerless_column_count_mismatch_is_an_error() {
    let (_tmp, path) = create_temp_file("yes,30-39,no\n");
    let columns = vec!["class".to_string(), "age".to_string()];

    let err = load_dataset(&path, b',', false, Some(&columns)).unwrap_err();
    assert!(err.to_string().contains("columns"));
}

#[test]
fn respects_custom_delimiter() {
    let (_tmp, path) = create_temp_file("class;mood\nyes;a\nno;b\n");

    let data = load_dataset(&path, b';', true, None).unwrap();

    assert_eq!(data.attributes(), &["class", "mood"]);
    assert_eq!(data.column("mood").unwrap(), &["a", "b"]);
}

#[test]
fn numeric_looking_values_stay_categorical() {
    let (_tmp, path) = create_temp_file("class,deg_malig\nyes,3\nno,1\nno,2\n");

    let data = load_dataset(&path, b',', true, None).unwrap();

    assert_eq!(data.column("deg_malig").unwrap(), &["3", "1", "2"]);
}

#[test]
fn missing_values_become_the_placeholder_token() {
    let (_tmp, path) = create_temp_file("class,node_caps\nyes,no\nno,\nno,yes\n");

    let data = load_dataset(&path, b',', true, None).unwrap();

    assert_eq!(
        data.column("node_caps").unwrap(),
        &["no", MISSING_TOKEN, "yes"]
    );
}

#[test]
fn file_with_only_a_header_is_an_error() {
    let (_tmp, path) = create_temp_file("class,mood\n");

    let err = load_dataset(&path, b',', true, None).unwrap_err();
    assert!(err.to_string().contains("no data rows"));
}

#[test]
fn nonexistent_file_is_an_error() {
    let path = std::path::Path::new("/nonexistent/data.csv");

    assert!(load_dataset(path, b',', true, None).is_err());
}
