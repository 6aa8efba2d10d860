//! Smoothed probability estimation and the trained model

use std::collections::HashMap;
use tracing::debug;

use super::vocabulary::{vocabulary_from, word_frequency_from, Vocabulary, WordFrequency};
use crate::corpus::{Class, TrainingMessages};

/// `numerator / denominator`, or `NaN` when the denominator is zero
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return f64::NAN;
    }
    numerator as f64 / denominator as f64
}

/// Word → class-conditional probability lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Probability {
    by_word: HashMap<String, f64>,
}

impl Probability {
    /// Laplace-smoothed `P(word | class)` for every vocabulary word.
    ///
    /// The denominator is the number of distinct words recorded for the
    /// class plus the vocabulary size, not the class's total token count.
    pub fn estimate(frequency: &WordFrequency, vocabulary: &Vocabulary) -> Self {
        let denominator = (frequency.distinct_words() + vocabulary.len()) as f64;
        let by_word = vocabulary
            .iter()
            .map(|word| {
                let p = (frequency.get(word) + 1) as f64 / denominator;
                (word.to_string(), p)
            })
            .collect();
        Self { by_word }
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.by_word.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.by_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_word.is_empty()
    }
}

/// Trained statistics for one class
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModel {
    message_total: usize,
    prior: f64,
    word_frequency: WordFrequency,
    word_probabilities: Probability,
}

impl ClassModel {
    fn fit(messages: &[String], training_total: usize, vocabulary: &Vocabulary) -> Self {
        let word_frequency = word_frequency_from(messages);
        let word_probabilities = Probability::estimate(&word_frequency, vocabulary);
        Self {
            message_total: messages.len(),
            prior: ratio(messages.len(), training_total),
            word_frequency,
            word_probabilities,
        }
    }

    /// Number of training messages in this class
    pub fn message_total(&self) -> usize {
        self.message_total
    }

    /// Share of the training messages in this class
    pub fn prior(&self) -> f64 {
        self.prior
    }

    pub fn word_frequency(&self) -> &WordFrequency {
        &self.word_frequency
    }

    pub fn word_probabilities(&self) -> &Probability {
        &self.word_probabilities
    }
}

/// A fitted two-class model. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    message_total: usize,
    ham: ClassModel,
    spam: ClassModel,
    vocabulary: Vocabulary,
}

impl TrainingSet {
    /// Fit a model from scratch on the given training messages
    pub fn fit(training: &TrainingMessages) -> Self {
        let message_total = training.total();
        let vocabulary = vocabulary_from(&[training.ham.as_slice(), training.spam.as_slice()]);
        let ham = ClassModel::fit(&training.ham, message_total, &vocabulary);
        let spam = ClassModel::fit(&training.spam, message_total, &vocabulary);

        debug!(
            "Fitted model: {} messages ({} ham, {} spam), {} vocabulary words",
            message_total,
            ham.message_total,
            spam.message_total,
            vocabulary.len()
        );

        Self {
            message_total,
            ham,
            spam,
            vocabulary,
        }
    }

    /// Total number of training messages
    pub fn message_total(&self) -> usize {
        self.message_total
    }

    pub fn ham(&self) -> &ClassModel {
        &self.ham
    }

    pub fn spam(&self) -> &ClassModel {
        &self.spam
    }

    pub fn class(&self, class: Class) -> &ClassModel {
        match class {
            Class::Ham => &self.ham,
            Class::Spam => &self.spam,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}
