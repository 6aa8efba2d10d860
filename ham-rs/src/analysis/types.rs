//! Analysis types and data structures

use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::corpus::{Class, WordCounts};
use crate::error::Result;
use crate::model::{ratio, TrainingSet};

/// Confusion counts of a model over the held-out test cases
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Evaluation {
    /// Number of test cases classified
    pub message_total: usize,
    /// Predicted ham, actually ham
    pub correct_ham: usize,
    /// Predicted spam, actually spam
    pub correct_spam: usize,
    /// Predicted ham, actually spam
    pub incorrect_ham: usize,
    /// Predicted spam, actually ham
    pub incorrect_spam: usize,
}

impl Evaluation {
    /// Tally one prediction against its ground truth
    pub fn record(&mut self, predicted: Class, actual: Class) {
        self.message_total += 1;
        match (predicted, actual) {
            (Class::Ham, Class::Ham) => self.correct_ham += 1,
            (Class::Ham, Class::Spam) => self.incorrect_ham += 1,
            (Class::Spam, Class::Spam) => self.correct_spam += 1,
            (Class::Spam, Class::Ham) => self.incorrect_spam += 1,
        }
    }

    /// Test cases predicted ham
    pub fn predicted_ham(&self) -> usize {
        self.correct_ham + self.incorrect_ham
    }

    /// Test cases predicted spam
    pub fn predicted_spam(&self) -> usize {
        self.correct_spam + self.incorrect_spam
    }

    /// `correct_ham / (correct_ham + incorrect_spam)`.
    ///
    /// Both terms of the denominator are messages whose true label is ham, so
    /// this and [`Evaluation::percentage_correct_spam`] are computed over
    /// disjoint sets of test cases and need not sum to one.
    pub fn percentage_correct_ham(&self) -> f64 {
        ratio(self.correct_ham, self.correct_ham + self.incorrect_spam)
    }

    /// `correct_spam / (correct_spam + incorrect_ham)`
    pub fn percentage_correct_spam(&self) -> f64 {
        ratio(self.correct_spam, self.correct_spam + self.incorrect_ham)
    }

    /// Share of all test cases classified correctly
    pub fn overall_accuracy(&self) -> f64 {
        ratio(self.correct_ham + self.correct_spam, self.message_total)
    }
}

/// One preprocessing configuration's fitted model and its evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub name: String,
    pub word_counts: WordCounts,
    pub training_set: TrainingSet,
    pub evaluation: Evaluation,
}

impl Analysis {
    /// Flatten into the exported report shape
    pub fn summary(&self) -> AnalysisSummary {
        let ts = &self.training_set;
        AnalysisSummary {
            name: self.name.clone(),
            vocabulary_size: ts.vocabulary().len(),
            training_messages: ts.message_total(),
            training_words: self.word_counts,
            ham: ClassSummary {
                messages: ts.ham().message_total(),
                prior: finite(ts.ham().prior()),
                distinct_words: ts.ham().word_frequency().distinct_words(),
                word_occurrences: ts.ham().word_frequency().total_occurrences(),
            },
            spam: ClassSummary {
                messages: ts.spam().message_total(),
                prior: finite(ts.spam().prior()),
                distinct_words: ts.spam().word_frequency().distinct_words(),
                word_occurrences: ts.spam().word_frequency().total_occurrences(),
            },
            evaluation: self.evaluation,
            predicted_ham: self.evaluation.predicted_ham(),
            predicted_spam: self.evaluation.predicted_spam(),
            percentage_correct_ham: finite(self.evaluation.percentage_correct_ham()),
            percentage_correct_spam: finite(self.evaluation.percentage_correct_spam()),
            overall_accuracy: finite(self.evaluation.overall_accuracy()),
        }
    }
}

// JSON has no NaN; undefined ratios export as null.
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Exported per-class statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSummary {
    pub messages: usize,
    pub prior: Option<f64>,
    pub distinct_words: usize,
    pub word_occurrences: u64,
}

/// Exported analysis report. Carries no probability tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub name: String,
    pub vocabulary_size: usize,
    pub training_messages: usize,
    pub training_words: WordCounts,
    pub ham: ClassSummary,
    pub spam: ClassSummary,
    pub evaluation: Evaluation,
    pub predicted_ham: usize,
    pub predicted_spam: usize,
    pub percentage_correct_ham: Option<f64>,
    pub percentage_correct_spam: Option<f64>,
    pub overall_accuracy: Option<f64>,
}

/// Analyses in configuration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analyses(pub Vec<Analysis>);

impl Analyses {
    pub fn iter(&self) -> std::slice::Iter<'_, Analysis> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn summaries(&self) -> Vec<AnalysisSummary> {
        self.iter().map(Analysis::summary).collect()
    }

    /// Write the analysis summaries as pretty-printed JSON
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &self.summaries())?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Analyses {
    type Item = &'a Analysis;
    type IntoIter = std::slice::Iter<'a, Analysis>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
