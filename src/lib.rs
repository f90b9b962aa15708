//! Merit: Categorical Feature Selection Library
//!
//! A library for selecting predictive feature subsets from categorical
//! datasets using symmetric uncertainty and a CFS-style merit score,
//! searched greedily forward and backward.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
