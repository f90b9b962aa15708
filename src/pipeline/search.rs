//! Greedy subset search: forward selection and backward elimination
//!
//! Both drivers are local hill-climbers over the 2^|features| subset lattice
//! and are not guaranteed to find the global optimum. Each run owns its own
//! subset/score state; nothing is shared between the two directions.

use serde::Serialize;

use super::su_matrix::SuMatrix;

/// Which greedy search(es) to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    Both,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
            Direction::Both => write!(f, "both"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "backward" => Ok(Direction::Backward),
            "both" => Ok(Direction::Both),
            _ => Err(format!(
                "Unknown search direction: '{}'. Use 'forward', 'backward' or 'both'.",
                s
            )),
        }
    }
}

/// Snapshot of one accepted search round.
#[derive(Debug, Clone, Serialize)]
pub struct IterationRecord {
    /// 1-based round counter.
    pub iteration: usize,
    /// The subset after this round's add/remove was applied.
    pub subset: Vec<String>,
    /// Merit of that subset.
    pub score: f64,
}

/// Final subset, its merit, and the per-round trail that led there.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub selected: Vec<String>,
    pub score: f64,
    pub log: Vec<IterationRecord>,
}

/// Forward selection: grow from the empty subset, one feature per round.
///
/// Each round scores every pool candidate added to the current subset and
/// keeps the first candidate that strictly beats the round's running best
/// (pool order breaks ties). The round is accepted unless its best score
/// drops below the best score so far - an *equal* score is accepted, so the
/// subset can keep growing without improvement. That tie acceptance mirrors
/// the reference behavior and is deliberate; see DESIGN.md.
pub fn forward_select(su: &SuMatrix) -> SearchOutcome {
    let mut selected: Vec<usize> = Vec::new();
    let mut pool: Vec<usize> = (0..su.len()).collect();
    let mut best = 0.0;
    let mut iteration = 0;
    let mut log = Vec::new();

    while !pool.is_empty() {
        iteration += 1;

        let mut round_best = 0.0;
        let mut pick: Option<usize> = None;

        for (pool_idx, &candidate) in pool.iter().enumerate() {
            let mut trial = selected.clone();
            trial.push(candidate);
            let score = su.merit_of(&trial);
            if score > round_best {
                round_best = score;
                pick = Some(pool_idx);
            }
        }

        // No candidate scored above zero: nothing to add. The reference code
        // has no defined winner here, so the search stops.
        let Some(pool_idx) = pick else { break };

        if round_best < best {
            break;
        }

        let added = pool.remove(pool_idx);
        selected.push(added);
        best = round_best;
        log.push(IterationRecord {
            iteration,
            subset: names(su, &selected),
            score: best,
        });
    }

    SearchOutcome {
        selected: names(su, &selected),
        score: best,
        log,
    }
}

/// Backward elimination: shrink from the full feature set, one per round.
///
/// Starts from the merit of the complete pool and removes the feature whose
/// absence scores highest each round, with the same strict-< stopping rule
/// (and tie acceptance) as forward selection. Stops at one remaining feature;
/// the empty subset is never evaluated.
pub fn backward_select(su: &SuMatrix) -> SearchOutcome {
    let mut selected: Vec<usize> = (0..su.len()).collect();
    let mut best = su.merit_of(&selected);
    let mut iteration = 0;
    let mut log = Vec::new();

    while selected.len() > 1 {
        iteration += 1;

        let mut round_best = 0.0;
        let mut pick: Option<usize> = None;

        for idx in 0..selected.len() {
            let mut trial = selected.clone();
            trial.remove(idx);
            let score = su.merit_of(&trial);
            if score > round_best {
                round_best = score;
                pick = Some(idx);
            }
        }

        let Some(idx) = pick else { break };

        if round_best < best {
            break;
        }

        selected.remove(idx);
        best = round_best;
        log.push(IterationRecord {
            iteration,
            subset: names(su, &selected),
            score: best,
        });
    }

    SearchOutcome {
        selected: names(su, &selected),
        score: best,
        log,
    }
}

fn names(su: &SuMatrix, subset: &[usize]) -> Vec<String> {
    subset.iter().map(|&i| su.features()[i].clone()).collect()
}
