//! Feedback scoring
//!
//! Feedback is the pair `(exact, partial)`: pegs with the right color in the right
//! position ("black") and additional pegs with a right color in the wrong position
//! ("white").

use super::code::Code;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for feedback text that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("expected two numbers \"exact partial\", got '{0}'")]
    Malformed(String),
}

/// Result of scoring a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Feedback {
    pub exact: u8,
    pub partial: u8,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// The terminal feedback for a board with `positions` pegs
    #[inline]
    #[must_use]
    pub const fn solved(positions: usize) -> Self {
        Self::new(positions as u8, 0)
    }

    /// Check if this feedback means the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_solved(self, positions: usize) -> bool {
        self.exact as usize == positions && self.partial == 0
    }

    /// Parse feedback from a line such as `"2 1"`
    ///
    /// # Errors
    /// Returns `FeedbackError::Malformed` unless the text is exactly two non-negative
    /// integers separated by whitespace.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::Feedback;
    ///
    /// assert_eq!(Feedback::parse("2 1"), Ok(Feedback::new(2, 1)));
    /// assert!(Feedback::parse("2").is_err());
    /// assert!(Feedback::parse("two one").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, FeedbackError> {
        let malformed = || FeedbackError::Malformed(text.trim().to_string());

        let mut numbers = text.split_whitespace().map(str::parse::<u8>);
        match (numbers.next(), numbers.next(), numbers.next()) {
            (Some(Ok(exact)), Some(Ok(partial)), None) => Ok(Self::new(exact, partial)),
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.exact, self.partial)
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Score `guess` against `target`
///
/// Exact matches count positions that agree. Partial matches are the per-color
/// minimum of occurrences in both codes, summed, minus the exact matches, so a peg
/// is never counted twice and duplicate colors are capped by the scarcer side.
///
/// Both codes must come from the same board; symbols are not validated here.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::{Code, Feedback, score};
///
/// let guess: Code = "1122".parse().unwrap();
/// let secret: Code = "1213".parse().unwrap();
/// assert_eq!(score(&guess, &secret), Feedback::new(1, 2));
/// ```
#[inline]
#[must_use]
pub fn score(guess: &Code, target: &Code) -> Feedback {
    let exact = guess
        .pegs()
        .iter()
        .zip(target.pegs())
        .filter(|(g, t)| g == t)
        .count() as u8;

    let guess_counts = guess.color_counts();
    let target_counts = target.color_counts();
    let common: u8 = guess_counts
        .iter()
        .zip(&target_counts)
        .map(|(&g, &t)| g.min(t))
        .sum();

    Feedback::new(exact, common - exact)
}
