//! Empirical probability estimation for categorical attributes

use std::collections::HashMap;

use super::dataset::{Dataset, SelectionError};

/// Empirical distribution of one attribute's observed values.
///
/// Keys are exactly the distinct values observed in the record set; the
/// probabilities sum to 1.0 within floating-point tolerance. Values from the
/// attribute's wider domain that never occur carry no entry (and therefore
/// never feed a `log2(0)` into the entropy formula).
pub fn distribution(
    data: &Dataset,
    attribute: &str,
) -> Result<HashMap<String, f64>, SelectionError> {
    if data.is_empty() {
        return Err(SelectionError::EmptyDataset);
    }

    let column = data.column(attribute)?;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in column {
        *counts.entry(value.clone()).or_insert(0) += 1;
    }

    let total = data.len() as f64;
    Ok(counts
        .into_iter()
        .map(|(value, count)| (value, count as f64 / total))
        .collect())
}

/// Joint distribution of two attributes, keyed by per-record value pairs.
///
/// Same estimation rule as [`distribution`], with the composite value
/// `(x_i, y_i)` of each record as the categorical outcome.
pub fn pair_distribution(
    data: &Dataset,
    x: &str,
    y: &str,
) -> Result<HashMap<(String, String), f64>, SelectionError> {
    if data.is_empty() {
        return Err(SelectionError::EmptyDataset);
    }

    let xs = data.column(x)?;
    let ys = data.column(y)?;

    let mut counts: HashMap<(String, String), usize> = HashMap::new();
    for (xv, yv) in xs.iter().zip(ys) {
        *counts.entry((xv.clone(), yv.clone())).or_insert(0) += 1;
    }

    let total = data.len() as f64;
    Ok(counts
        .into_iter()
        .map(|(pair, count)| (pair, count as f64 / total))
        .collect())
}
