//! Console rendering of analyses

use crossterm::style::Stylize;

use crate::analysis::{Analyses, Analysis};

/// Format a ratio as a percentage, `n/a` when undefined
pub fn percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}%", value * 100.0)
    } else {
        "n/a".to_string()
    }
}

/// Render one analysis block
pub fn render_analysis(analysis: &Analysis) -> String {
    let ts = &analysis.training_set;
    let ev = &analysis.evaluation;

    format!(
        "{title}\n\
         Vocabulary has {vocabulary} words\n\
         Training words: {ham_words} ham, {spam_words} spam\n\
         \n\
         Training Set:\n\
         \t{spam_messages} of {messages} messages were spam ({spam_share})\n\
         \n\
         Test Set:\n\
         \tPredicted: {predicted_ham} ham, {predicted_spam} spam\n\
         \tCorrect Ham: {correct_ham}\n\
         \tCorrect Spam: {correct_spam}\n\
         \tIncorrect Ham (actually was spam): {incorrect_ham}\n\
         \tIncorrect Spam (actually was ham): {incorrect_spam}\n\
         \tPercentage Correct Ham: {pct_ham}\n\
         \tPercentage Correct Spam: {pct_spam}\n\
         {accuracy}\n",
        title = format!("Analysis: {}", analysis.name).cyan().underlined(),
        vocabulary = ts.vocabulary().len(),
        ham_words = analysis.word_counts.ham,
        spam_words = analysis.word_counts.spam,
        spam_messages = ts.spam().message_total(),
        messages = ts.message_total(),
        spam_share = percent(ts.spam().prior()),
        predicted_ham = ev.predicted_ham(),
        predicted_spam = ev.predicted_spam(),
        correct_ham = ev.correct_ham,
        correct_spam = ev.correct_spam,
        incorrect_ham = ev.incorrect_ham,
        incorrect_spam = ev.incorrect_spam,
        pct_ham = percent(ev.percentage_correct_ham()),
        pct_spam = percent(ev.percentage_correct_spam()),
        accuracy = format!("\tOverall Accuracy: {}", percent(ev.overall_accuracy()))
            .green()
            .bold(),
    )
}

/// Print every analysis followed by a closing line
pub fn print_analyses(analyses: &Analyses) {
    for analysis in analyses {
        println!("{}", render_analysis(analysis));
    }
    println!("\nDone.");
}
