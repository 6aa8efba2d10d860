//! Corpus parser
//!
//! Turns `class<delimiter>text` lines into a shuffled train/test split.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use super::types::*;
use crate::error::{HamError, Result};

/// Share of the shuffled lines used for training
pub const DEFAULT_TRAIN_RATIO: f64 = 0.75;

/// Corpus parser
#[derive(Debug, Clone)]
pub struct CorpusParser {
    delimiter: String,
    train_ratio: f64,
}

impl CorpusParser {
    /// Create a parser with the given label/text delimiter
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            train_ratio: DEFAULT_TRAIN_RATIO,
        }
    }

    /// Override the training share of the split
    pub fn with_train_ratio(mut self, train_ratio: f64) -> Self {
        self.train_ratio = train_ratio;
        self
    }

    /// Read and split a corpus file
    pub fn from_file<P, R>(&self, path: P, rng: &mut R) -> Result<Corpus>
    where
        P: AsRef<Path>,
        R: Rng + ?Sized,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| HamError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(BufReader::new(file), rng)
    }

    /// Parse labeled lines, shuffle them with `rng` and split them into
    /// training messages and test cases.
    ///
    /// Lines are decoded lossily; invalid UTF-8 becomes U+FFFD.
    pub fn parse<B, R>(&self, mut reader: B, rng: &mut R) -> Result<Corpus>
    where
        B: BufRead,
        R: Rng + ?Sized,
    {
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = trim_line_ending(&buf);
            if line.is_empty() {
                continue;
            }
            lines.push(String::from_utf8_lossy(line).into_owned());
        }

        lines.shuffle(rng);

        let number_to_train = (lines.len() as f64 * self.train_ratio) as usize;
        debug!(
            "Splitting {} lines: {} for training",
            lines.len(),
            number_to_train
        );

        let mut corpus = Corpus::default();
        for (row, line) in lines.into_iter().enumerate() {
            let Some((label, text)) = line.split_once(self.delimiter.as_str()) else {
                warn!("Skipped line because it had no class: {}", line);
                continue;
            };

            let class: Class = label.parse().map_err(|_| HamError::InvalidClass {
                row,
                value: label.to_string(),
            })?;

            if text.is_empty() {
                return Err(HamError::EmptyText { row });
            }

            if row < number_to_train {
                match class {
                    Class::Ham => corpus.training.ham.push(text.to_string()),
                    Class::Spam => corpus.training.spam.push(text.to_string()),
                }
            } else {
                corpus.test_cases.push(TestCase::new(class, text));
            }
        }

        Ok(corpus)
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

impl Default for CorpusParser {
    fn default() -> Self {
        Self::new("\t")
    }
}
