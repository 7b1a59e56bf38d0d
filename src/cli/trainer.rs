//! Interactive practice loop and test runner

use anyhow::Result;
use console::style;

use crate::cli::args::Settings;
use crate::cli::prompts::{ask_answer, ask_yes_no, choose};
use crate::quiz::{Attempt, Exam, ExamOutcome, PracticeSession, CHOICE_LETTERS};
use crate::report::export_exam_report;
use crate::utils::{print_failure, print_info, print_score, print_section_header, print_success};

/// Message shown for a practice attempt
pub fn attempt_message(attempt: &Attempt) -> String {
    match attempt {
        Attempt::Correct => "Correct! You really know your Roman numerals.".to_string(),
        Attempt::TryAgain { .. } => "Not quite! Try again.".to_string(),
        Attempt::Revealed { answer } => format!(
            "That's incorrect. The correct answer was {}. \
             You might need to do a little more revision on Roman numerals.",
            answer
        ),
    }
}

/// One line per wrongly answered question, naming the correct choice
pub fn corrections(exam: &Exam, outcome: &ExamOutcome) -> Vec<String> {
    exam.questions()
        .iter()
        .zip(outcome.answers.iter())
        .filter(|(_, answer)| !answer.correct)
        .map(|(question, answer)| {
            format!(
                "{}. The correct answer was ({}) {}.",
                answer.number,
                question.answer,
                question.correct_choice()
            )
        })
        .collect()
}

/// Ask random practice questions until the user stops
pub fn run_practice(settings: &Settings) -> Result<()> {
    print_section_header("Practice");
    let mut session = PracticeSession::new(settings.seed, settings.max_tries);

    loop {
        let mut round = session.next_round();
        println!();
        println!("    {}", style(round.prompt()).white().bold());

        let attempt = loop {
            // An empty answer still uses up a try
            let guess = ask_answer("Your answer")?;
            let attempt = round.submit(&guess);
            match &attempt {
                Attempt::Correct => print_success(&attempt_message(&attempt)),
                _ => print_failure(&attempt_message(&attempt)),
            }
            if attempt.is_final() {
                break attempt;
            }
        };
        session.record(&attempt);
        tracing::debug!(tries = round.tries_used(), ?attempt, "practice round finished");

        if !ask_yes_no("Would you like to practice again?")? {
            break;
        }
    }

    print_info(&format!(
        "You answered {} of {} practice question(s) correctly.",
        session.rounds_correct(),
        session.rounds_played()
    ));
    Ok(())
}

/// Ask every test question once and show the graded result
pub fn run_exam(settings: &Settings) -> Result<ExamOutcome> {
    print_section_header("Test");
    let exam = Exam::standard();
    let mut given = Vec::with_capacity(exam.questions().len());

    for (i, question) in exam.questions().iter().enumerate() {
        println!();
        let prompt = format!("{}. {}", i + 1, question.prompt);
        let index = choose(&prompt, &question.labelled_choices())?;
        given.push(CHOICE_LETTERS[index].to_string());
    }

    let outcome = exam.score(&given);
    tracing::info!(score = outcome.score(), total = outcome.total(), "test finished");
    print_score(&outcome.message());
    for line in corrections(&exam, &outcome) {
        print_info(&line);
    }

    if let Some(path) = &settings.report {
        export_exam_report(&outcome, path)?;
        print_info(&format!("Report saved to {}", path.display()));
    }

    Ok(outcome)
}
