//! CFS-style merit score for a candidate feature subset
//!
//! Rewards subsets whose features each correlate with the class while the
//! subset as a whole carries little internal redundancy.

use super::dataset::{Dataset, SelectionError};
use super::metrics::symmetric_uncertainty;

/// Merit (goodness) of a non-empty feature subset against the target.
///
/// numerator   = Σ SU(f, target) over the subset (class relevance)
/// denominator = 1.0 for a singleton, otherwise the full |S|×|S| pairwise
///               SU matrix sum, self-terms included (total redundancy)
/// score       = numerator / sqrt(denominator)
///
/// The denominator cannot normally reach zero for a non-empty subset - each
/// non-constant feature contributes SU(f, f) = 1.0 - but the zero case is
/// still mapped to a score of 0.0 (all-constant subsets hit it).
pub fn merit(subset: &[String], target: &str, data: &Dataset) -> Result<f64, SelectionError> {
    if subset.is_empty() {
        return Err(SelectionError::EmptySubset);
    }

    let mut numerator = 0.0;
    for feature in subset {
        numerator += symmetric_uncertainty(feature, target, data)?;
    }

    let denominator = if subset.len() == 1 {
        1.0
    } else {
        let mut total = 0.0;
        for f1 in subset {
            for f2 in subset {
                total += symmetric_uncertainty(f1, f2, data)?;
            }
        }
        total
    };

    if denominator == 0.0 {
        return Ok(0.0);
    }

    Ok(numerator / denominator.sqrt())
}
