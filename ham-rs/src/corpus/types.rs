//! Corpus types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Message class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    Ham,
    Spam,
}

impl Class {
    pub fn as_str(&self) -> &'static str {
        match self {
            Class::Ham => "ham",
            Class::Spam => "spam",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label that is neither `ham` nor `spam`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid class: {0}")]
pub struct ParseClassError(pub String);

impl FromStr for Class {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ham" => Ok(Class::Ham),
            "spam" => Ok(Class::Spam),
            other => Err(ParseClassError(other.to_string())),
        }
    }
}

/// Training message texts grouped by class
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingMessages {
    pub ham: Vec<String>,
    pub spam: Vec<String>,
}

impl TrainingMessages {
    /// Total number of training messages across both classes
    pub fn total(&self) -> usize {
        self.ham.len() + self.spam.len()
    }

    /// Count non-empty tokens per class
    pub fn word_counts(&self) -> WordCounts {
        WordCounts {
            ham: count_tokens(&self.ham),
            spam: count_tokens(&self.spam),
        }
    }

    pub(crate) fn map_texts(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            ham: self.ham.iter().map(|m| f(m.as_str())).collect(),
            spam: self.spam.iter().map(|m| f(m.as_str())).collect(),
        }
    }
}

fn count_tokens(messages: &[String]) -> usize {
    messages
        .iter()
        .flat_map(|m| m.split(' '))
        .filter(|w| !w.is_empty())
        .count()
}

/// Non-empty token totals of the training text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WordCounts {
    pub ham: usize,
    pub spam: usize,
}

/// A held-out message with its ground-truth label
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub class: Class,
    pub text: String,
}

impl TestCase {
    pub fn new(class: Class, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
        }
    }
}

/// A labeled corpus split into training messages and test cases.
///
/// Test cases never feed model fitting; their labels are only read when
/// tallying an evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    pub training: TrainingMessages,
    pub test_cases: Vec<TestCase>,
}

impl Corpus {
    pub fn new(training: TrainingMessages, test_cases: Vec<TestCase>) -> Self {
        Self {
            training,
            test_cases,
        }
    }

    /// Non-empty token totals of the training text
    pub fn word_counts(&self) -> WordCounts {
        self.training.word_counts()
    }

    /// Apply a text transform to every training message and test case text.
    /// Labels are left untouched.
    pub fn map_texts(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            training: self.training.map_texts(&f),
            test_cases: self
                .test_cases
                .iter()
                .map(|case| TestCase::new(case.class, f(case.text.as_str())))
                .collect(),
        }
    }
}
