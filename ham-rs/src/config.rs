//! Configuration for ham-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::corpus::DEFAULT_TRAIN_RATIO;
use crate::error::{HamError, Result};
use crate::preprocess::Pipeline;

/// Environment variable prefix, e.g. `HAM__CORPUS__SEED=7`
pub const ENV_PREFIX: &str = "HAM";

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub logging: LoggingConfig,
    /// Preprocessing configurations to evaluate, in report order
    pub analyses: Vec<Pipeline>,
}

/// Corpus source and split
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Labeled message file, one `class<delimiter>text` per line
    pub path: String,
    /// Separator between class and text
    pub delimiter: String,
    /// Share of shuffled lines used for training
    pub train_ratio: f64,
    /// Shuffle seed; a fresh entropy seed is drawn when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: "textMsgs.data".to_string(),
            delimiter: "\t".to_string(),
            train_ratio: DEFAULT_TRAIN_RATIO,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Layer an optional TOML file and `HAM__*` environment variables over
    /// the defaults. An empty `analyses` list falls back to
    /// [`Pipeline::defaults`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let mut config: Config = builder.build()?.try_deserialize()?;
        if config.analyses.is_empty() {
            config.analyses = Pipeline::defaults();
        }
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let ratio = self.corpus.train_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(HamError::Config(format!(
                "train_ratio must be in (0, 1], got {}",
                ratio
            )));
        }

        if self.corpus.delimiter.is_empty() {
            return Err(HamError::Config("delimiter must not be empty".to_string()));
        }

        if self.analyses.is_empty() {
            return Err(HamError::Config("No analyses configured".to_string()));
        }

        Ok(())
    }
}
