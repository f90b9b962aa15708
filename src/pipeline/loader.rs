//! Dataset loader for delimited text files
//!
//! Everything is read as categorical text: the CSV reader is told to skip
//! schema inference so numeric-looking columns stay strings, and nulls are
//! mapped to the distinct token `"?"` (the convention of the UCI categorical
//! datasets this tool targets).

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use super::dataset::Dataset;

/// Placeholder token for missing values; treated as an ordinary category.
pub const MISSING_TOKEN: &str = "?";

/// Load a delimited text file into a categorical [`Dataset`].
///
/// * `delimiter` - field separator byte (default `,` at the CLI)
/// * `has_header` - whether the first line names the attributes
/// * `columns` - attribute names for headerless files; must match the column
///   count. Ignored when the file has a header.
pub fn load_dataset(
    path: &Path,
    delimiter: u8,
    has_header: bool,
    columns: Option<&[String]>,
) -> Result<Dataset> {
    let df = CsvReadOptions::default()
        .with_has_header(has_header)
        // 0 rows of inference = every column is read as a string
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_separator(delimiter))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to open file: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to parse delimited file: {}", path.display()))?;

    let attributes: Vec<String> = if has_header {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        let names = columns.ok_or_else(|| {
            anyhow::anyhow!("--columns is required when loading a file without a header row")
        })?;
        if names.len() != df.width() {
            anyhow::bail!(
                "--columns names {} attributes but the file has {} columns",
                names.len(),
                df.width()
            );
        }
        names.to_vec()
    };

    let mut value_columns: Vec<Vec<String>> = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let casted = column
            .cast(&DataType::String)
            .with_context(|| format!("Failed to read column '{}' as text", column.name()))?;
        let ca = casted
            .str()
            .with_context(|| format!("Failed to read column '{}' as text", column.name()))?;
        value_columns.push(
            ca.into_iter()
                .map(|v| v.unwrap_or(MISSING_TOKEN).to_string())
                .collect(),
        );
    }

    let dataset = Dataset::from_columns(attributes, value_columns)
        .with_context(|| format!("Invalid table shape in {}", path.display()))?;

    if dataset.is_empty() {
        anyhow::bail!("File contains no data rows: {}", path.display());
    }

    Ok(dataset)
}
