//! Report module - summarizing and exporting selection results

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
