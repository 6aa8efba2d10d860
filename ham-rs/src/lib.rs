//! ham-rs: Naive Bayes ham/spam classifier for short text messages
//!
//! Trains a multinomial Naive Bayes model on a labeled corpus and compares
//! text preprocessing strategies by held-out accuracy.
//!
//! # Pipeline
//!
//! 1. [`corpus`]: read `class<TAB>text` lines and split them, with a seeded
//!    random source, into training messages and test cases
//! 2. [`preprocess`]: optionally stem, strip punctuation or drop stopwords
//! 3. [`model`]: build the vocabulary and per-class word frequencies, estimate
//!    Laplace-smoothed probabilities, score messages in log space
//! 4. [`analysis`]: evaluate each preprocessing configuration on the test cases
//!
//! # Example
//!
//! ```no_run
//! use ham_rs::corpus::CorpusParser;
//! use ham_rs::preprocess::Pipeline;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut rng = StdRng::seed_from_u64(7);
//!     let corpus = CorpusParser::default().from_file("textMsgs.data", &mut rng)?;
//!
//!     let analyses = ham_rs::analysis::run(&corpus, &Pipeline::defaults());
//!     ham_rs::report::print_analyses(&analyses);
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod model;
pub mod preprocess;
pub mod report;

// Re-export commonly used types
pub use analysis::{Analyses, Analysis, Evaluation};
pub use config::Config;
pub use corpus::{Class, Corpus, CorpusParser, TestCase, TrainingMessages};
pub use error::{HamError, Result};
pub use model::TrainingSet;
pub use preprocess::{Pipeline, Preprocessor};
