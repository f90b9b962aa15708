//! Shared test utilities and fixture datasets

use std::path::PathBuf;

use merit::pipeline::Dataset;
use tempfile::TempDir;

/// Four records, binary class, one perfectly predictive feature and one
/// independent noise feature.
///
/// - `class`: yes, yes, no, no
/// - `mood`:  a, a, b, b   (SU with class = 1.0)
/// - `noise`: x, y, x, y   (SU with class = 0.0)
pub fn toy_dataset() -> Dataset {
    dataset(
        &["class", "mood", "noise"],
        &[
            &["yes", "a", "x"],
            &["yes", "a", "y"],
            &["no", "b", "x"],
            &["no", "b", "y"],
        ],
    )
}

/// Every record identical: every attribute has zero entropy.
pub fn constant_dataset() -> Dataset {
    dataset(
        &["class", "f1", "f2"],
        &[
            &["yes", "a", "x"],
            &["yes", "a", "x"],
            &["yes", "a", "x"],
            &["yes", "a", "x"],
        ],
    )
}

/// Two byte-identical perfect features. Adding the second one leaves the
/// merit unchanged, which exercises the tie-acceptance rule of the searches.
pub fn twin_feature_dataset() -> Dataset {
    dataset(
        &["class", "f1", "f2"],
        &[
            &["yes", "a", "a"],
            &["yes", "a", "a"],
            &["no", "b", "b"],
            &["no", "b", "b"],
        ],
    )
}

/// Eight records with features of graded usefulness, for exercising multi
/// round searches: `strong` tracks the class exactly, `partial` tracks it on
/// six of eight records, `noise` is independent of everything.
pub fn graded_dataset() -> Dataset {
    dataset(
        &["class", "strong", "partial", "noise"],
        &[
            &["yes", "a", "p", "x"],
            &["yes", "a", "p", "y"],
            &["yes", "a", "p", "x"],
            &["yes", "a", "q", "y"],
            &["no", "b", "q", "x"],
            &["no", "b", "q", "y"],
            &["no", "b", "q", "x"],
            &["no", "b", "p", "y"],
        ],
    )
}

/// Build a dataset from string literals, panicking on fixture mistakes.
pub fn dataset(attributes: &[&str], rows: &[&[&str]]) -> Dataset {
    Dataset::from_rows(
        attributes.iter().map(|s| s.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|v| v.to_string()).collect())
            .collect(),
    )
    .unwrap()
}

/// Write raw text to a temp file and return its path (and the guard).
pub fn create_temp_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test_data.csv");
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}
