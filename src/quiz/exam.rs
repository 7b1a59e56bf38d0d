//! Multiple-choice Roman numeral test
//!
//! The question bank is fixed. Scoring and grading are pure so the
//! interactive runner only has to collect one answer letter per question.

use serde::Serialize;

/// Letters used to label the choices of a question
pub const CHOICE_LETTERS: [char; 3] = ['a', 'b', 'c'];

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamQuestion {
    pub prompt: &'static str,
    pub choices: [&'static str; 3],
    /// Letter of the correct choice
    pub answer: char,
}

impl ExamQuestion {
    const fn new(prompt: &'static str, choices: [&'static str; 3], answer: char) -> Self {
        Self {
            prompt,
            choices,
            answer,
        }
    }

    /// Choices labelled as `(a) 999`
    pub fn labelled_choices(&self) -> Vec<String> {
        CHOICE_LETTERS
            .iter()
            .zip(self.choices.iter())
            .map(|(letter, choice)| format!("({}) {}", letter, choice))
            .collect()
    }

    /// Text of the correct choice
    pub fn correct_choice(&self) -> &'static str {
        let index = CHOICE_LETTERS
            .iter()
            .position(|&letter| letter == self.answer)
            .unwrap_or(0);
        self.choices[index]
    }

    /// Whether a free-text answer matches, ignoring case and surrounding space
    pub fn is_correct(&self, given: &str) -> bool {
        let mut chars = given.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => letter.to_ascii_lowercase() == self.answer,
            _ => false,
        }
    }
}

static STANDARD_QUESTIONS: [ExamQuestion; 5] = [
    ExamQuestion::new("What is CMXCIX in Arabic numerals?", ["999", "1009", "990"], 'a'),
    ExamQuestion::new(
        "What is 137 in Roman numerals?",
        ["CXXLVII", "CXXXVII", "CXIIIL"],
        'b',
    ),
    ExamQuestion::new("What is CCXLV + LXVII?", ["CCCXIV", "CCCXII", "CCCIV"], 'b'),
    ExamQuestion::new("What is CCLVI / 8?", ["XLIV", "XXXVI", "XXXII"], 'c'),
    ExamQuestion::new("What is 23 * 41?", ["CMXLIII", "CMII", "CMLXVI"], 'a'),
];

/// Overall grade for a finished test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Great,
    NotBad,
    GoodTry,
}

impl Grade {
    /// Grade an absolute score: 4 or more is great, 2 or more is not bad
    pub fn from_score(score: usize) -> Self {
        if score >= 4 {
            Grade::Great
        } else if score >= 2 {
            Grade::NotBad
        } else {
            Grade::GoodTry
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Grade::Great => "Great job!",
            Grade::NotBad => "Not bad!",
            Grade::GoodTry => "Good try.",
        }
    }
}

/// The answer given to one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub number: usize,
    pub given: String,
    pub expected: char,
    pub correct: bool,
}

/// Result of a finished test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamOutcome {
    pub answers: Vec<AnsweredQuestion>,
}

impl ExamOutcome {
    pub fn score(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    pub fn total(&self) -> usize {
        self.answers.len()
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score())
    }

    /// e.g. "Great job! You got 5 out of 5 correct."
    pub fn message(&self) -> String {
        format!(
            "{} You got {} out of {} correct.",
            self.grade().headline(),
            self.score(),
            self.total()
        )
    }
}

/// An ordered question bank
#[derive(Debug, Clone)]
pub struct Exam {
    questions: &'static [ExamQuestion],
}

impl Default for Exam {
    fn default() -> Self {
        Self::standard()
    }
}

impl Exam {
    /// The built-in five question test
    pub fn standard() -> Self {
        Self {
            questions: &STANDARD_QUESTIONS,
        }
    }

    pub fn questions(&self) -> &'static [ExamQuestion] {
        self.questions
    }

    /// Score a full set of answers, one per question in order.
    ///
    /// Missing answers count as wrong; extra answers are ignored.
    pub fn score<S: AsRef<str>>(&self, given: &[S]) -> ExamOutcome {
        let answers = self
            .questions
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let given = given.get(i).map(|s| s.as_ref()).unwrap_or("");
                AnsweredQuestion {
                    number: i + 1,
                    given: given.trim().to_lowercase(),
                    expected: question.answer,
                    correct: question.is_correct(given),
                }
            })
            .collect();
        ExamOutcome { answers }
    }
}
