//! ham-rs: compare text preprocessing strategies for Naive Bayes spam filtering

use anyhow::Context;
use clap::Parser;
use ham_rs::corpus::CorpusParser;
use ham_rs::{analysis, report, Config};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "ham-rs", version, about = "Classify text messages as ham or spam")]
struct Cli {
    /// Labeled message file
    #[arg(short, long)]
    file: Option<String>,

    /// Delimiter between class and words in data (default is tab)
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Seed for the train/test shuffle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Share of messages used for training
    #[arg(long)]
    train_ratio: Option<f64>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write analysis summaries as JSON to this file
    #[arg(short, long)]
    write: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(file) = cli.file {
        config.corpus.path = file;
    }
    if let Some(delimiter) = cli.delimiter {
        config.corpus.delimiter = delimiter;
    }
    if let Some(seed) = cli.seed {
        config.corpus.seed = Some(seed);
    }
    if let Some(train_ratio) = cli.train_ratio {
        config.corpus.train_ratio = train_ratio;
    }
    config.validate()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("ham_rs={}", config.logging.level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting ham-rs v{}", env!("CARGO_PKG_VERSION"));

    let seed = config.corpus.seed.unwrap_or_else(rand::random);
    info!("Shuffling corpus with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let corpus = CorpusParser::new(config.corpus.delimiter.as_str())
        .with_train_ratio(config.corpus.train_ratio)
        .from_file(&config.corpus.path, &mut rng)
        .with_context(|| format!("cannot parse file {}", config.corpus.path))?;

    info!(
        "Loaded {} training messages ({} ham, {} spam) and {} test cases",
        corpus.training.total(),
        corpus.training.ham.len(),
        corpus.training.spam.len(),
        corpus.test_cases.len()
    );

    let analyses = analysis::run(&corpus, &config.analyses);

    if let Some(path) = cli.write {
        analyses
            .write_to_file(&path)
            .with_context(|| format!("could not write analysis to {}", path.display()))?;
        info!("Wrote analysis to {}", path.display());
    }

    report::print_analyses(&analyses);

    Ok(())
}
