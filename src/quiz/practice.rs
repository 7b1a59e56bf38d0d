//! Practice rounds: write a random number as a Roman numeral
//!
//! A round holds one target number and counts the user's attempts. The
//! interactive loop in `cli::trainer` only feeds answers in and prints the
//! returned [`Attempt`].

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::numeral::{encode, NumeralError, MAX_VALUE, MIN_VALUE};

/// Default number of answers allowed per round
pub const DEFAULT_MAX_TRIES: u32 = 3;

/// Result of submitting one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// Answer matched the canonical numeral
    Correct,
    /// Answer was wrong, more tries remain
    TryAgain { remaining: u32 },
    /// Answer was wrong and no tries remain
    Revealed { answer: String },
}

impl Attempt {
    /// Whether the round is over after this attempt
    pub fn is_final(&self) -> bool {
        !matches!(self, Attempt::TryAgain { .. })
    }
}

/// A single practice question
#[derive(Debug, Clone)]
pub struct PracticeRound {
    target: i64,
    answer: String,
    max_tries: u32,
    tries: u32,
    outcome: Option<Attempt>,
}

impl PracticeRound {
    /// Create a round for a specific number.
    ///
    /// `max_tries` below 1 is raised to 1.
    pub fn new(target: i64, max_tries: u32) -> Result<Self, NumeralError> {
        let answer = encode(target)?;
        Ok(Self {
            target,
            answer,
            max_tries: max_tries.max(1),
            tries: 0,
            outcome: None,
        })
    }

    /// Create a round for a number drawn uniformly from `1..=3999`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, max_tries: u32) -> Self {
        let target = rng.gen_range(MIN_VALUE..=MAX_VALUE);
        let answer = roman_for_drawn(target);
        Self {
            target,
            answer,
            max_tries: max_tries.max(1),
            tries: 0,
            outcome: None,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn tries_used(&self) -> u32 {
        self.tries
    }

    /// The question shown to the user
    pub fn prompt(&self) -> String {
        format!("What is {} written in Roman numerals?", self.target)
    }

    /// Submit an answer.
    ///
    /// Answers are trimmed and compared case-insensitively. Once the round is
    /// over, further submissions return the final attempt unchanged.
    pub fn submit(&mut self, guess: &str) -> Attempt {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        self.tries += 1;
        let attempt = if guess.trim().eq_ignore_ascii_case(&self.answer) {
            Attempt::Correct
        } else if self.tries >= self.max_tries {
            Attempt::Revealed {
                answer: self.answer.clone(),
            }
        } else {
            Attempt::TryAgain {
                remaining: self.max_tries - self.tries,
            }
        };

        tracing::debug!(number = self.target, tries = self.tries, ?attempt, "practice answer");

        if attempt.is_final() {
            self.outcome = Some(attempt.clone());
        }
        attempt
    }
}

fn roman_for_drawn(target: i64) -> String {
    // Drawn from the valid range, so encoding cannot fail
    encode(target).unwrap_or_default()
}

/// Source of practice rounds, optionally seeded for reproducible sessions
pub struct PracticeSession {
    rng: Box<dyn RngCore>,
    max_tries: u32,
    rounds_played: usize,
    rounds_correct: usize,
}

impl PracticeSession {
    pub fn new(seed: Option<u64>, max_tries: u32) -> Self {
        let rng: Box<dyn RngCore> = match seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        };
        Self {
            rng,
            max_tries,
            rounds_played: 0,
            rounds_correct: 0,
        }
    }

    /// Draw the next round
    pub fn next_round(&mut self) -> PracticeRound {
        self.rounds_played += 1;
        PracticeRound::random(&mut self.rng, self.max_tries)
    }

    /// Record a finished round
    pub fn record(&mut self, attempt: &Attempt) {
        if *attempt == Attempt::Correct {
            self.rounds_correct += 1;
        }
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub fn rounds_correct(&self) -> usize {
        self.rounds_correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_first_try() {
        let mut round = PracticeRound::new(14, 3).unwrap();
        assert_eq!(round.submit(" xiv "), Attempt::Correct);
        assert_eq!(round.tries_used(), 1);
    }

    #[test]
    fn test_revealed_after_max_tries() {
        let mut round = PracticeRound::new(14, 3).unwrap();
        assert_eq!(round.submit("XIIII"), Attempt::TryAgain { remaining: 2 });
        assert_eq!(round.submit("IVX"), Attempt::TryAgain { remaining: 1 });
        assert_eq!(
            round.submit("XV"),
            Attempt::Revealed {
                answer: "XIV".to_string()
            }
        );
        // Round is closed
        assert_eq!(
            round.submit("XIV"),
            Attempt::Revealed {
                answer: "XIV".to_string()
            }
        );
        assert_eq!(round.tries_used(), 3);
    }

    #[test]
    fn test_empty_answer_uses_a_try() {
        let mut round = PracticeRound::new(14, 2).unwrap();
        assert_eq!(round.submit(""), Attempt::TryAgain { remaining: 1 });
        assert_eq!(round.tries_used(), 1);
        assert!(matches!(round.submit("  "), Attempt::Revealed { .. }));
    }

    #[test]
    fn test_zero_tries_is_one() {
        let mut round = PracticeRound::new(1, 0).unwrap();
        assert!(matches!(round.submit("V"), Attempt::Revealed { .. }));
    }

    #[test]
    fn test_round_rejects_out_of_range_target() {
        assert!(PracticeRound::new(0, 3).is_err());
    }

    #[test]
    fn test_seeded_sessions_repeat() {
        let mut a = PracticeSession::new(Some(7), 3);
        let mut b = PracticeSession::new(Some(7), 3);
        for _ in 0..20 {
            let ra = a.next_round();
            let rb = b.next_round();
            assert_eq!(ra.target(), rb.target());
            assert!((1..=3999).contains(&ra.target()));
            assert_eq!(ra.answer(), encode(ra.target()).unwrap());
        }
        assert_eq!(a.rounds_played(), 20);
    }
}
