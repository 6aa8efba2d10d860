//! Integration tests for corpus ingestion and the evaluation harness

use ham_rs::analysis::{self, evaluate};
use ham_rs::corpus::{Class, CorpusParser};
use ham_rs::{HamError, Pipeline, Preprocessor, TrainingSet};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use tempfile::NamedTempFile;

const MESSAGES: &str = "\
ham\tHey, are we still on for lunch tomorrow?
ham\tI love carrots! See you at the market.
ham\tCan you pick up the kids after school
ham\tRunning late, will call you soon
ham\tThanks for dinner last night, it was great
ham\tDid you finish the report for Monday?
ham\tLet's meet at the library at 5pm
ham\tMom says happy birthday!! Call her later
spam\tWINNER!! You have won a FREE prize. Call now to claim!
spam\tURGENT: your account has been selected for a cash reward
spam\tFree entry to win a new phone, text WIN to 80086
spam\tClaim your free ringtone now, reply STOP to opt out
spam\tYou have been chosen for a guaranteed cash prize. Call 0800
spam\tCongratulations! Free holiday voucher, claim today
";

fn corpus_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(MESSAGES.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_from_file_splits_every_line() {
    let file = corpus_file();
    let mut rng = StdRng::seed_from_u64(11);
    let corpus = CorpusParser::default().from_file(file.path(), &mut rng).unwrap();

    // 14 lines, floor(14 * 0.75) = 10 for training
    assert_eq!(corpus.training.total(), 10);
    assert_eq!(corpus.test_cases.len(), 4);
}

#[test]
fn test_from_missing_file() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = CorpusParser::default()
        .from_file("does/not/exist.data", &mut rng)
        .unwrap_err();
    assert!(matches!(err, HamError::Read { .. }));
    assert!(err.to_string().contains("does/not/exist.data"));
}

#[test]
fn test_default_run_produces_one_analysis_per_configuration() {
    let file = corpus_file();
    let mut rng = StdRng::seed_from_u64(5);
    let corpus = CorpusParser::default().from_file(file.path(), &mut rng).unwrap();

    let analyses = analysis::run(&corpus, &Pipeline::defaults());
    assert_eq!(analyses.len(), 5);

    for analysis in &analyses {
        let evaluation = &analysis.evaluation;
        assert_eq!(evaluation.message_total, corpus.test_cases.len());
        assert_eq!(
            evaluation.correct_ham
                + evaluation.correct_spam
                + evaluation.incorrect_ham
                + evaluation.incorrect_spam,
            evaluation.message_total
        );
        assert_eq!(analysis.training_set.message_total(), corpus.training.total());
    }
}

#[test]
fn test_runs_are_deterministic_for_a_seed() {
    let file = corpus_file();
    let parser = CorpusParser::default();

    let first = parser
        .from_file(file.path(), &mut StdRng::seed_from_u64(99))
        .unwrap();
    let second = parser
        .from_file(file.path(), &mut StdRng::seed_from_u64(99))
        .unwrap();
    assert_eq!(first, second);

    let a = analysis::run(&first, &Pipeline::defaults());
    let b = analysis::run(&second, &Pipeline::defaults());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.evaluation, y.evaluation);
        assert_eq!(x.summary(), y.summary());
    }
}

#[test]
fn test_frozen_model_gives_identical_decisions() {
    let file = corpus_file();
    let corpus = CorpusParser::default()
        .from_file(file.path(), &mut StdRng::seed_from_u64(3))
        .unwrap();
    let model = TrainingSet::fit(&corpus.training);

    let first = evaluate(&model, &corpus.test_cases);
    let decisions: Vec<Class> = corpus
        .test_cases
        .iter()
        .map(|case| model.classify(&case.text))
        .collect();

    for _ in 0..5 {
        assert_eq!(evaluate(&model, &corpus.test_cases), first);
        let again: Vec<Class> = corpus
            .test_cases
            .iter()
            .map(|case| model.classify(&case.text))
            .collect();
        assert_eq!(again, decisions);
    }
}

#[test]
fn test_single_class_training_yields_undefined_ratios() {
    let text = "ham\tsee you soon\nham\tlunch at noon\nham\tcall me later\nham\tsee you at noon\n";
    let corpus = CorpusParser::default()
        .parse(text.as_bytes(), &mut StdRng::seed_from_u64(8))
        .unwrap();

    let analyses = analysis::run(&corpus, &[Pipeline::new("none", vec![])]);
    let analysis = &analyses.0[0];

    assert_eq!(analysis.training_set.spam().message_total(), 0);
    assert_eq!(analysis.training_set.spam().prior(), 0.0);
    // every test case is ham
    assert!(analysis.evaluation.percentage_correct_spam().is_nan());
}

#[test]
fn test_stopword_configuration_removes_stopwords_everywhere() {
    let text = "ham\tthe cat and the dog\nspam\twin the cash now\nham\tthe cat sat\nham\ta dog ran\n";
    let corpus = CorpusParser::default()
        .with_train_ratio(1.0)
        .parse(text.as_bytes(), &mut StdRng::seed_from_u64(1))
        .unwrap();

    let pipeline = Pipeline::new("stopwords", vec![Preprocessor::RemoveStopwords]);
    let processed = pipeline.apply(&corpus);
    assert!(processed.training.ham.contains(&"cat dog".to_string()));

    let analyses = analysis::run(&corpus, &[pipeline]);
    let vocabulary = analyses.0[0].training_set.vocabulary();
    assert!(!vocabulary.contains("the"));
    assert!(!vocabulary.contains("now"));
    assert!(vocabulary.contains("cash"));
}

#[test]
fn test_write_to_file_exports_summaries() {
    let file = corpus_file();
    let corpus = CorpusParser::default()
        .from_file(file.path(), &mut StdRng::seed_from_u64(21))
        .unwrap();
    let analyses = analysis::run(&corpus, &Pipeline::defaults());

    let out = NamedTempFile::new().unwrap();
    analyses.write_to_file(out.path()).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.path()).unwrap()).unwrap();
    let entries = written.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["name"], "Default Analysis (no preprocessing)");
    assert_eq!(
        entries[0]["evaluation"]["message_total"],
        corpus.test_cases.len()
    );
    assert!(entries[0].get("word_probabilities").is_none());
}
