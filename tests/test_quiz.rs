//! Tests for practice rounds and the multiple-choice test

use romanum::numeral::{decode, encode};
use romanum::quiz::{Attempt, Exam, Grade, PracticeRound, PracticeSession, CHOICE_LETTERS};

fn choice_index(letter: char) -> usize {
    CHOICE_LETTERS.iter().position(|&l| l == letter).unwrap()
}

#[test]
fn test_question_bank_agrees_with_codec() {
    let exam = Exam::standard();
    let questions = exam.questions();
    assert_eq!(questions.len(), 5);

    let expected = [
        decode("CMXCIX").unwrap().to_string(),
        encode(137).unwrap(),
        encode((decode("CCXLV").unwrap() + decode("LXVII").unwrap()) as i64).unwrap(),
        encode((decode("CCLVI").unwrap() / 8) as i64).unwrap(),
        encode(23 * 41).unwrap(),
    ];

    for (question, expected) in questions.iter().zip(expected.iter()) {
        assert_eq!(
            question.choices[choice_index(question.answer)],
            expected,
            "wrong answer key for '{}'",
            question.prompt
        );
        assert_eq!(question.correct_choice(), expected);
    }
}

#[test]
fn test_exam_scores_and_grades() {
    let exam = Exam::standard();

    let all_wrong = exam.score(&["c", "c", "c", "a", "b"]);
    assert_eq!(all_wrong.score(), 0);
    assert_eq!(all_wrong.grade(), Grade::GoodTry);
    assert_eq!(all_wrong.message(), "Good try. You got 0 out of 5 correct.");

    let four = exam.score(&["a", "b", "b", "c", "b"]);
    assert_eq!(four.score(), 4);
    assert_eq!(four.grade(), Grade::Great);
    assert!(!four.answers[4].correct);
}

#[test]
fn test_practice_round_flow() {
    let mut round = PracticeRound::new(2020, 3).unwrap();
    assert_eq!(round.prompt(), "What is 2020 written in Roman numerals?");
    assert_eq!(round.submit("MMXXX"), Attempt::TryAgain { remaining: 2 });
    assert_eq!(round.submit("mmxx"), Attempt::Correct);
    assert!(Attempt::Correct.is_final());
}

#[test]
fn test_practice_session_counts() {
    let mut session = PracticeSession::new(Some(42), 1);
    let mut round = session.next_round();
    let answer = round.answer().to_string();
    let attempt = round.submit(&answer);
    session.record(&attempt);

    let mut round = session.next_round();
    let attempt = round.submit("not a numeral");
    assert!(matches!(attempt, Attempt::Revealed { .. }));
    session.record(&attempt);

    assert_eq!(session.rounds_played(), 2);
    assert_eq!(session.rounds_correct(), 1);
}
