//! Runs preprocessing configurations against a corpus

use tracing::{debug, info};

use super::types::*;
use crate::corpus::{Corpus, TestCase};
use crate::model::TrainingSet;
use crate::preprocess::Pipeline;

/// Evaluate every configuration in order.
///
/// Each configuration works on its own copy of `corpus` and fits its own
/// model, so nothing is shared between them.
pub fn run(corpus: &Corpus, pipelines: &[Pipeline]) -> Analyses {
    let analyses = pipelines
        .iter()
        .map(|pipeline| {
            let processed = pipeline.apply(corpus);
            let analysis = analysis_from(&pipeline.name, &processed);
            info!(
                "{}: overall accuracy {:.4} over {} test cases",
                analysis.name,
                analysis.evaluation.overall_accuracy(),
                analysis.evaluation.message_total
            );
            analysis
        })
        .collect();

    Analyses(analyses)
}

/// Fit a model on `corpus`'s training messages and evaluate it on its test cases
pub fn analysis_from(name: &str, corpus: &Corpus) -> Analysis {
    let training_set = TrainingSet::fit(&corpus.training);
    let evaluation = evaluate(&training_set, &corpus.test_cases);

    Analysis {
        name: name.to_string(),
        word_counts: corpus.word_counts(),
        training_set,
        evaluation,
    }
}

/// Classify each test case and tally the result against its label
pub fn evaluate(model: &TrainingSet, cases: &[TestCase]) -> Evaluation {
    let mut evaluation = Evaluation::default();
    for case in cases {
        evaluation.record(model.classify(&case.text), case.class);
    }

    debug!(
        "Evaluated {} cases: {} correct ham, {} correct spam, {} incorrect ham, {} incorrect spam",
        evaluation.message_total,
        evaluation.correct_ham,
        evaluation.correct_spam,
        evaluation.incorrect_ham,
        evaluation.incorrect_spam
    );

    evaluation
}
