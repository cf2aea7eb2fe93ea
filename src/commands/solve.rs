//! Self-play
//!
//! The solver plays against a hidden secret, with feedback produced by the scorer.

use crate::core::{Code, Feedback, score};
use crate::solver::{Solver, SolverError, Step};
use crate::universe::Universe;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Result of solving a secret
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: Code,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    /// Number of guesses it took, including the winning one
    #[must_use]
    pub fn turns(&self) -> usize {
        self.guesses.len()
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Worst case the solver accepted when choosing this guess (`None` for the opening)
    pub worst_case: Option<usize>,
}

/// Solve a specific secret
///
/// Self-play feedback is consistent by construction, so the error branch only
/// surfaces if the scorer and the solver disagree.
///
/// # Errors
/// Returns `SolverError` if the solver rejects the generated feedback.
///
/// # Examples
/// ```
/// use mastermind_minimax::commands::solve_secret;
/// use mastermind_minimax::universe::Universe;
///
/// let result = solve_secret(Universe::classic(), "6666".parse().unwrap()).unwrap();
/// assert_eq!(result.turns(), 3);
/// ```
pub fn solve_secret(universe: &Universe, secret: Code) -> Result<SolveResult, SolverError> {
    let mut solver = Solver::with_universe(universe);
    let mut guesses = Vec::new();

    loop {
        let guess = solver.current_guess();
        let worst_case = solver.last_worst_case();
        let candidates_before = solver.remaining();
        let feedback = score(&guess, &secret);

        let step = solver.submit_feedback(feedback)?;
        let candidates_after = match step {
            Step::Solved { .. } => 1,
            Step::Next(_) => solver.remaining(),
        };

        guesses.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after,
            worst_case,
        });

        if let Step::Solved { .. } = step {
            return Ok(SolveResult { secret, guesses });
        }
    }
}

/// Draw a secret uniformly from the universe
///
/// Returns `None` only for an empty universe.
#[must_use]
pub fn pick_secret<R: Rng + ?Sized>(universe: &Universe, rng: &mut R) -> Option<Code> {
    universe.codes().choose(rng).copied()
}

/// Self-play against a randomly drawn secret
///
/// The random source is injected so runs can be seeded.
///
/// # Errors
/// Returns `SolverError` if the solver rejects the generated feedback.
pub fn run_autoplay<R: Rng + ?Sized>(
    universe: &Universe,
    rng: &mut R,
) -> Result<SolveResult, SolverError> {
    let secret = pick_secret(universe, rng)
        .unwrap_or_else(|| Code::opening(universe.config()));
    solve_secret(universe, secret)
}
