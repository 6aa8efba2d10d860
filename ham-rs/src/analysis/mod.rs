//! Evaluation harness
//!
//! Runs each preprocessing configuration end to end (preprocess, fit,
//! classify the held-out cases) and collects one [`Analysis`] per
//! configuration.

pub mod runner;
pub mod types;

pub use runner::{analysis_from, evaluate, run};
pub use types::*;
