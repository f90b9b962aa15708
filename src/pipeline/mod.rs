//! Pipeline module - the selection core and its loader

pub mod dataset;
pub mod frequency;
pub mod loader;
pub mod merit;
pub mod metrics;
pub mod search;
pub mod su_matrix;

pub use dataset::{Dataset, SelectionError};
pub use frequency::{distribution, pair_distribution};
pub use loader::{load_dataset, MISSING_TOKEN};
pub use merit::merit;
pub use metrics::{entropy, joint_entropy, symmetric_uncertainty};
pub use search::{backward_select, forward_select, Direction, IterationRecord, SearchOutcome};
pub use su_matrix::SuMatrix;
