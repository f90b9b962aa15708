//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Merit - select predictive feature subsets from categorical datasets
#[derive(Parser, Debug)]
#[command(name = "merit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (delimited text, e.g. CSV)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Target/class column name (the attribute the subset should predict)
    #[arg(short, long)]
    pub target: String,

    /// Search direction: "forward", "backward" or "both"
    #[arg(short, long, default_value = "both")]
    pub direction: String,

    /// Field delimiter (single character)
    #[arg(long, default_value = ",", value_parser = validate_delimiter)]
    pub delimiter: char,

    /// Treat the file as headerless; attribute names come from --columns
    #[arg(long, default_value = "false")]
    pub no_header: bool,

    /// Attribute names for headerless files (comma-separated, one per column)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Columns to drop before the search (comma-separated).
    /// These attributes are removed from the candidate pool before any analysis.
    #[arg(long, value_delimiter = ',')]
    pub drop_columns: Vec<String>,

    /// Export the selection results (subsets, scores, iteration logs) to a JSON file
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

impl Cli {
    /// Attribute names for headerless input, or None when a header row exists.
    pub fn column_names(&self) -> Option<&[String]> {
        if self.columns.is_empty() {
            None
        } else {
            Some(&self.columns)
        }
    }
}

/// Validator for the delimiter parameter
fn validate_delimiter(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{}'",
            s
        )),
    }
}
