//! Solver session
//!
//! One session plays one game: it owns the shrinking candidate set and the guess
//! history, and borrows the read-only code universe.

use super::minimax::choose_next_guess;
use crate::core::{Code, Feedback, GameConfig, score};
use crate::universe::Universe;
use thiserror::Error;

/// Errors reported by [`Solver::submit_feedback`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No code in the universe is consistent with the feedback history
    #[error("no code is consistent with the feedback given (turn {turn}); check the feedback")]
    ContradictoryFeedback { turn: usize },
    /// Feedback arrived after the game was already won
    #[error("the code has already been solved")]
    AlreadySolved,
}

/// Outcome of a successful feedback submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Play this guess next
    Next(Code),
    /// The last guess was the secret
    Solved { code: Code, turns: usize },
}

/// A completed turn: the guess and the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
    /// Candidates left after applying this feedback
    pub remaining: usize,
}

/// Knuth minimax solver session
///
/// Starts from the canonical opening and narrows its candidates with each feedback.
/// The candidate set never grows.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    universe: &'a Universe,
    candidates: Vec<Code>,
    history: Vec<Turn>,
    current: Code,
    worst_case: Option<usize>,
    solved: bool,
}

impl Solver<'static> {
    /// Create a session for the classic game over the shared universe
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::solver::Solver;
    ///
    /// let solver = Solver::new();
    /// assert_eq!(solver.current_guess().to_string(), "1 1 2 2");
    /// assert_eq!(solver.remaining(), 1296);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_universe(Universe::classic())
    }
}

impl Default for Solver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Solver<'a> {
    /// Create a session over any universe
    #[must_use]
    pub fn with_universe(universe: &'a Universe) -> Self {
        Self {
            universe,
            candidates: universe.codes().to_vec(),
            history: Vec::new(),
            current: Code::opening(universe.config()),
            worst_case: None,
            solved: false,
        }
    }

    /// The guess waiting for feedback (or the winning guess once solved)
    #[inline]
    #[must_use]
    pub const fn current_guess(&self) -> Code {
        self.current
    }

    /// Apply feedback for the current guess
    ///
    /// Returns the next guess, or `Step::Solved` when the feedback is all exact.
    ///
    /// # Errors
    /// - `SolverError::ContradictoryFeedback` if no candidate survives, including
    ///   counts no pair of codes can produce. The session is left as it was before
    ///   the call and cannot make progress on this history.
    /// - `SolverError::AlreadySolved` once the game has been won.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::Feedback;
    /// use mastermind_minimax::solver::{Solver, Step};
    ///
    /// let mut solver = Solver::new();
    /// let step = solver.submit_feedback(Feedback::new(0, 0)).unwrap();
    /// assert_eq!(step, Step::Next("3345".parse().unwrap()));
    /// assert_eq!(solver.remaining(), 256);
    /// ```
    pub fn submit_feedback(&mut self, feedback: Feedback) -> Result<Step, SolverError> {
        if self.solved {
            return Err(SolverError::AlreadySolved);
        }

        let guess = self.current;

        if feedback.is_solved(self.config().positions()) {
            self.solved = true;
            self.history.push(Turn {
                guess,
                feedback,
                remaining: 1,
            });
            return Ok(Step::Solved {
                code: guess,
                turns: self.history.len(),
            });
        }

        let consistent: Vec<Code> = self
            .candidates
            .iter()
            .filter(|candidate| score(&guess, candidate) == feedback)
            .copied()
            .collect();

        let Some((next, worst_case)) = choose_next_guess(self.universe.codes(), &consistent)
        else {
            return Err(SolverError::ContradictoryFeedback { turn: self.turn() });
        };

        self.candidates = consistent;
        self.history.push(Turn {
            guess,
            feedback,
            remaining: self.candidates.len(),
        });
        self.current = next;
        self.worst_case = Some(worst_case);

        Ok(Step::Next(next))
    }

    /// Codes still consistent with every feedback so far
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Count of remaining candidates
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Completed turns, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Every guess made so far, including the current one
    #[must_use]
    pub fn guesses(&self) -> Vec<Code> {
        let mut guesses: Vec<Code> = self.history.iter().map(|t| t.guess).collect();
        if !self.solved {
            guesses.push(self.current);
        }
        guesses
    }

    /// 1-based number of the current guess
    #[inline]
    #[must_use]
    pub fn turn(&self) -> usize {
        if self.solved {
            self.history.len()
        } else {
            self.history.len() + 1
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Worst-case remaining candidates of the current guess
    ///
    /// `None` for the opening, which is fixed rather than scored.
    #[inline]
    #[must_use]
    pub const fn last_worst_case(&self) -> Option<usize> {
        self.worst_case
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.universe.config()
    }

}
