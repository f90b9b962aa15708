//! Precomputed symmetric-uncertainty matrix
//!
//! The greedy searches evaluate the merit of many overlapping subsets; every
//! one of those evaluations reduces to sums over pairwise SU values and
//! feature-to-target SU values. Computing each SU exactly once up front turns
//! the searches into cheap lookups without changing any observable score.
//! Pair computation runs in parallel via Rayon with a progress bar.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use super::dataset::{Dataset, SelectionError};
use super::metrics::symmetric_uncertainty;

/// All SU values the searches need: feature-vs-feature and feature-vs-target.
#[derive(Debug, Clone)]
pub struct SuMatrix {
    features: Vec<String>,
    /// SU(feature_i, target), indexed like `features`.
    class_su: Vec<f64>,
    /// Row-major n×n pairwise SU, symmetric, diagonal computed (not assumed 1.0
    /// - a constant feature has SU(f, f) = 0.0 by the zero-denominator rule).
    pairwise: Vec<f64>,
}

impl SuMatrix {
    /// Compute every pairwise and feature-to-target SU once.
    ///
    /// Fails fast on an empty feature list, an empty record set, or any
    /// attribute the schema does not define.
    pub fn compute(
        data: &Dataset,
        features: &[String],
        target: &str,
    ) -> Result<Self, SelectionError> {
        if features.is_empty() {
            return Err(SelectionError::EmptySubset);
        }

        let n = features.len();

        // Upper triangle including the diagonal; the lower half is mirrored.
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i..n).map(move |j| (i, j)))
            .collect();

        let pb = ProgressBar::new((pairs.len() + n) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "   Computing symmetric uncertainty [{bar:40.cyan/blue}] {pos}/{len} pairs ({percent}%) [{eta}]",
                )
                .unwrap()
                .progress_chars("=>-"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        let upper: Vec<((usize, usize), f64)> = pairs
            .par_iter()
            .map(|&(i, j)| {
                let su = symmetric_uncertainty(&features[i], &features[j], data)?;
                pb.inc(1);
                Ok(((i, j), su))
            })
            .collect::<Result<_, SelectionError>>()?;

        let class_su: Vec<f64> = features
            .par_iter()
            .map(|feature| {
                let su = symmetric_uncertainty(feature, target, data)?;
                pb.inc(1);
                Ok(su)
            })
            .collect::<Result<_, SelectionError>>()?;

        pb.finish_with_message(format!("   [OK] {} SU pairs computed", pairs.len() + n));

        let mut pairwise = vec![0.0; n * n];
        for ((i, j), su) in upper {
            pairwise[i * n + j] = su;
            pairwise[j * n + i] = su;
        }

        Ok(Self {
            features: features.to_vec(),
            class_su,
            pairwise,
        })
    }

    /// Feature names in pool order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Number of candidate features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// SU between two features by pool index.
    pub fn pair_su(&self, i: usize, j: usize) -> f64 {
        self.pairwise[i * self.features.len() + j]
    }

    /// SU between a feature and the target by pool index.
    pub fn class_su(&self, i: usize) -> f64 {
        self.class_su[i]
    }

    /// Merit of a subset given by pool indices.
    ///
    /// Reproduces [`super::merit::merit`] exactly: the same SU values are
    /// summed the same way, just from the cache instead of re-estimated.
    pub fn merit_of(&self, subset: &[usize]) -> f64 {
        if subset.is_empty() {
            return 0.0;
        }

        let numerator: f64 = subset.iter().map(|&i| self.class_su[i]).sum();

        let denominator = if subset.len() == 1 {
            1.0
        } else {
            let mut total = 0.0;
            for &i in subset {
                for &j in subset {
                    total += self.pair_su(i, j);
                }
            }
            total
        };

        if denominator == 0.0 {
            return 0.0;
        }

        numerator / denominator.sqrt()
    }
}
