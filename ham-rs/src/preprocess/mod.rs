//! Text preprocessing
//!
//! A [`Preprocessor`] is a pure text-to-text transform. A [`Pipeline`] chains
//! them in order and applies the chain to a copy of a corpus, so one
//! configuration can never observe another configuration's changes.

pub mod stopwords;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::corpus::Corpus;

pub use stopwords::{is_stopword, STOPWORDS};

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-zA-Z0-9 ]+").expect("punctuation pattern is valid"));

/// A single text transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preprocessor {
    /// Replace each space-separated token with its English stem
    Stem,
    /// Drop every character outside `[A-Za-z0-9 ]`
    StripPunctuation,
    /// Drop the 100 most common English words
    RemoveStopwords,
}

impl Preprocessor {
    /// Transform a single message
    pub fn process_message(&self, original: &str) -> String {
        match self {
            Preprocessor::Stem => stem(original),
            Preprocessor::StripPunctuation => PUNCTUATION.replace_all(original, "").into_owned(),
            Preprocessor::RemoveStopwords => original
                .split(' ')
                .filter(|word| !is_stopword(word))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Transform every training message and test case text of a corpus
    pub fn process(&self, corpus: &Corpus) -> Corpus {
        match self {
            Preprocessor::Stem => {
                let stemmer = Stemmer::create(Algorithm::English);
                corpus.map_texts(|text| stem_with(&stemmer, text))
            }
            _ => corpus.map_texts(|text| self.process_message(text)),
        }
    }
}

impl fmt::Display for Preprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preprocessor::Stem => "stem",
            Preprocessor::StripPunctuation => "strip_punctuation",
            Preprocessor::RemoveStopwords => "remove_stopwords",
        };
        f.write_str(name)
    }
}

fn stem(original: &str) -> String {
    stem_with(&Stemmer::create(Algorithm::English), original)
}

// Tokens are split on single spaces only; empty tokens stay empty.
fn stem_with(stemmer: &Stemmer, original: &str) -> String {
    original
        .split(' ')
        .map(|word| stemmer.stem(&word.to_lowercase()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A named, ordered chain of preprocessors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Preprocessor>,
}

impl Pipeline {
    pub fn new(name: impl Into<String>, steps: Vec<Preprocessor>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Run every step in order over a copy of `corpus`
    pub fn apply(&self, corpus: &Corpus) -> Corpus {
        let mut processed = corpus.clone();
        for step in &self.steps {
            processed = step.process(&processed);
        }
        processed
    }

    /// Transform a single message the same way [`Pipeline::apply`] does
    pub fn process_message(&self, original: &str) -> String {
        self.steps
            .iter()
            .fold(original.to_string(), |text, step| step.process_message(&text))
    }

    /// The configurations compared by a default run, in report order
    pub fn defaults() -> Vec<Pipeline> {
        vec![
            Pipeline::new("Default Analysis (no preprocessing)", vec![]),
            Pipeline::new("No Punctuation Analysis", vec![Preprocessor::StripPunctuation]),
            Pipeline::new("Stemmer Analysis", vec![Preprocessor::Stem]),
            Pipeline::new(
                "Stemmer and No Punctuation Analysis",
                vec![Preprocessor::Stem, Preprocessor::StripPunctuation],
            ),
            Pipeline::new(
                "Remove 100 Most Common English Words",
                vec![Preprocessor::RemoveStopwords],
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Class, TestCase, TrainingMessages};

    fn sample_corpus() -> Corpus {
        Corpus::new(
            TrainingMessages {
                ham: vec!["I love carrots!".to_string()],
                spam: vec!["Running, jumping; winning?".to_string()],
            },
            vec![TestCase::new(Class::Ham, "the cat and the dog")],
        )
    }

    #[test]
    fn test_remove_stopwords_keeps_order() {
        let out = Preprocessor::RemoveStopwords.process_message("the cat and the dog");
        assert_eq!(out, "cat dog");
    }

    #[test]
    fn test_remove_stopwords_is_case_insensitive() {
        let out = Preprocessor::RemoveStopwords.process_message("The Cat AND the Dog");
        assert_eq!(out, "Cat Dog");
    }

    #[test]
    fn test_strip_punctuation() {
        let out = Preprocessor::StripPunctuation.process_message("how now, brown cow?");
        assert_eq!(out, "how now brown cow");
        let out = Preprocessor::StripPunctuation.process_message("£100 ca$h 4 U!!");
        assert_eq!(out, "100 cah 4 U");
    }

    #[test]
    fn test_strip_punctuation_does_not_resplit() {
        let out = Preprocessor::StripPunctuation.process_message("a - b");
        assert_eq!(out, "a  b");
    }

    #[test]
    fn test_strip_punctuation_is_idempotent() {
        let inputs = ["Hello, World!!", "ok...  see u @ 5pm :-)", "", "plain text"];
        for input in inputs {
            let once = Preprocessor::StripPunctuation.process_message(input);
            let twice = Preprocessor::StripPunctuation.process_message(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_stem_tokens() {
        let out = Preprocessor::Stem.process_message("running jumps");
        assert_eq!(out, "run jump");
    }

    #[test]
    fn test_stem_keeps_empty_tokens() {
        let out = Preprocessor::Stem.process_message("cats  dogs");
        assert_eq!(out, "cat  dog");
    }

    #[test]
    fn test_process_leaves_labels_and_source_alone() {
        let corpus = sample_corpus();
        let processed = Preprocessor::StripPunctuation.process(&corpus);

        assert_eq!(processed.training.ham, vec!["I love carrots"]);
        assert_eq!(processed.test_cases[0].class, Class::Ham);
        assert_eq!(corpus.training.ham, vec!["I love carrots!"]);
    }

    #[test]
    fn test_pipeline_order_matters() {
        let stem_then_strip = Pipeline::new(
            "stem then strip",
            vec![Preprocessor::Stem, Preprocessor::StripPunctuation],
        );
        let strip_then_stem = Pipeline::new(
            "strip then stem",
            vec![Preprocessor::StripPunctuation, Preprocessor::Stem],
        );

        // the stemmer sees "running," as one token and leaves it unstemmed
        assert_eq!(stem_then_strip.process_message("running, fast"), "running fast");
        assert_eq!(strip_then_stem.process_message("running, fast"), "run fast");
    }

    #[test]
    fn test_pipeline_apply_matches_process_message() {
        let corpus = sample_corpus();
        let pipeline = Pipeline::new(
            "stem and strip",
            vec![Preprocessor::Stem, Preprocessor::StripPunctuation],
        );
        let processed = pipeline.apply(&corpus);
        assert_eq!(
            processed.training.spam[0],
            pipeline.process_message(&corpus.training.spam[0])
        );
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let corpus = sample_corpus();
        let pipeline = Pipeline::new("none", vec![]);
        assert_eq!(pipeline.apply(&corpus), corpus);
    }

    #[test]
    fn test_default_pipelines() {
        let defaults = Pipeline::defaults();
        assert_eq!(defaults.len(), 5);
        assert!(defaults[0].steps.is_empty());
        assert_eq!(
            defaults[3].steps,
            vec![Preprocessor::Stem, Preprocessor::StripPunctuation]
        );
    }
}
