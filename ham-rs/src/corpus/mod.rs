//! Labeled corpus ingestion
//!
//! Reads delimiter-separated `class<TAB>text` lines, shuffles them with a
//! caller-supplied random source and splits them into training and test sets.

pub mod parser;
pub mod types;

pub use parser::{CorpusParser, DEFAULT_TRAIN_RATIO};
pub use types::*;
