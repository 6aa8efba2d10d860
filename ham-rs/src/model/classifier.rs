//! Log-domain Naive Bayes classification

use super::probability::TrainingSet;
use super::vocabulary::tokenize;
use crate::corpus::Class;

/// Accumulated `log10` scores of a message under each class
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scores {
    pub ham: f64,
    pub spam: f64,
    /// Tokens found in the vocabulary
    pub recognized: usize,
}

impl Scores {
    /// Ham only wins when strictly ahead; ties go to spam.
    ///
    /// `10^x` is monotonic, so comparing the log sums picks the same class as
    /// comparing the exponentiated values without underflowing on long messages.
    pub fn predicted(&self) -> Class {
        if self.ham > self.spam {
            Class::Ham
        } else {
            Class::Spam
        }
    }

    /// Scores mapped back to the probability domain (may underflow to zero)
    pub fn likelihoods(&self) -> (f64, f64) {
        (10f64.powf(self.ham), 10f64.powf(self.spam))
    }
}

impl TrainingSet {
    /// Score a message against both classes. Unknown tokens are skipped.
    pub fn score(&self, message: &str) -> Scores {
        let mut scores = Scores::default();
        for word in tokenize(message) {
            if !self.vocabulary().contains(word) {
                continue;
            }
            let (Some(p_ham), Some(p_spam)) = (
                self.ham().word_probabilities().get(word),
                self.spam().word_probabilities().get(word),
            ) else {
                continue;
            };
            scores.ham += p_ham.log10();
            scores.spam += p_spam.log10();
            scores.recognized += 1;
        }
        scores
    }

    /// Predict the class of a message
    pub fn classify(&self, message: &str) -> Class {
        self.score(message).predicted()
    }
}

/// Predict the class of `message` under `model`
pub fn classify(message: &str, model: &TrainingSet) -> Class {
    model.classify(message)
}
