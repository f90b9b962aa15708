//! Information-theoretic metrics over categorical attributes
//!
//! Shannon entropy, joint entropy and symmetric uncertainty, all pure
//! functions of (attribute names, record set). Probabilities come from the
//! empirical distributions in [`super::frequency`], so every `p` is strictly
//! positive and `log2` is always well-defined.

use super::dataset::{Dataset, SelectionError};
use super::frequency;

/// Shannon entropy H(x) = -Σ p·log2(p) of one attribute.
///
/// Zero iff the attribute is constant across all records.
pub fn entropy(x: &str, data: &Dataset) -> Result<f64, SelectionError> {
    let dist = frequency::distribution(data, x)?;
    Ok(shannon(dist.values().copied()))
}

/// Joint entropy H(x, y) of the composite (x, y) value per record.
///
/// Sanity bounds: max(H(x), H(y)) <= H(x, y) <= H(x) + H(y), and
/// H(x, x) == H(x).
pub fn joint_entropy(x: &str, y: &str, data: &Dataset) -> Result<f64, SelectionError> {
    let dist = frequency::pair_distribution(data, x, y)?;
    Ok(shannon(dist.values().copied()))
}

/// Symmetric uncertainty SU(x, y) = 2·(H(x) + H(y) - H(x, y)) / (H(x) + H(y)).
///
/// Normalized mutual information: symmetric in its arguments and bounded in
/// [0, 1]. When both attributes are constant the denominator is zero and the
/// result is defined as 0.0 rather than an error.
pub fn symmetric_uncertainty(x: &str, y: &str, data: &Dataset) -> Result<f64, SelectionError> {
    let hx = entropy(x, data)?;
    let hy = entropy(y, data)?;
    let hxy = joint_entropy(x, y, data)?;

    let denominator = hx + hy;
    if denominator == 0.0 {
        return Ok(0.0);
    }

    Ok(2.0 * (denominator - hxy) / denominator)
}

fn shannon(probabilities: impl Iterator<Item = f64>) -> f64 {
    probabilities.map(|p| -p * p.log2()).sum()
}
