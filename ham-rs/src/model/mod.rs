//! Multinomial Naive Bayes model
//!
//! - [`vocabulary`]: distinct words and per-class occurrence counts
//! - [`probability`]: Laplace-smoothed class-conditional probabilities
//! - [`classifier`]: log-domain scoring of a message against both classes

pub mod classifier;
pub mod probability;
pub mod vocabulary;

pub use classifier::{classify, Scores};
pub use probability::{ratio, ClassModel, Probability, TrainingSet};
pub use vocabulary::{tokenize, vocabulary_from, word_frequency_from, Vocabulary, WordFrequency};
