//! Vocabulary and word frequency construction

use std::collections::{HashMap, HashSet};

/// Split a message on literal spaces, dropping empty tokens
pub fn tokenize(message: &str) -> impl Iterator<Item = &str> {
    message.split(' ').filter(|word| !word.is_empty())
}

/// Distinct words seen across the training text of both classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Add every token of `message`
    pub fn extend_from_message(&mut self, message: &str) {
        for word in tokenize(message) {
            if !self.words.contains(word) {
                self.words.insert(word.to_string());
            }
        }
    }
}

/// Occurrence count of each word within one class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequency {
    counts: HashMap<String, u64>,
}

impl WordFrequency {
    /// Occurrences of `word`, zero if never seen
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words recorded for the class
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// Total number of token occurrences recorded for the class
    pub fn total_occurrences(&self) -> u64 {
        self.counts.values().sum()
    }

    fn record(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
    }
}

/// Build the vocabulary of one or more message collections
pub fn vocabulary_from(collections: &[&[String]]) -> Vocabulary {
    let mut vocabulary = Vocabulary::default();
    for messages in collections {
        for message in messages.iter() {
            vocabulary.extend_from_message(message);
        }
    }
    vocabulary
}

/// Count word occurrences across one class's messages
pub fn word_frequency_from(messages: &[String]) -> WordFrequency {
    let mut frequency = WordFrequency::default();
    for message in messages {
        for word in tokenize(message) {
            frequency.record(word);
        }
    }
    frequency
}
