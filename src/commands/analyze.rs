//! Guess analysis command
//!
//! Shows how a guess splits the whole universe into feedback classes.

use crate::core::{Code, CodeError, Feedback};
use crate::solver::minimax::partition_sizes;
use crate::universe::Universe;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub total_candidates: usize,
    /// Feedback classes and their sizes, ordered by feedback
    pub partitions: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    /// Expected class size if the secret is drawn uniformly
    pub expected_remaining: f64,
}

/// Analyze a guess against every code in the universe
///
/// # Errors
///
/// Returns `CodeError` if the text is not a valid code for the board.
pub fn analyze_code(text: &str, universe: &Universe) -> Result<AnalysisResult, CodeError> {
    let guess = universe.parse_code(text)?;
    Ok(analyze_guess(guess, universe.codes()))
}

/// Analyze a guess against an explicit candidate set
#[must_use]
pub fn analyze_guess(guess: Code, candidates: &[Code]) -> AnalysisResult {
    let partitions = partition_sizes(&guess, candidates);
    let total_candidates = candidates.len();
    let worst_case = partitions.iter().map(|&(_, n)| n).max().unwrap_or(0);

    let expected_remaining = if total_candidates == 0 {
        0.0
    } else {
        partitions.iter().map(|&(_, n)| (n * n) as f64).sum::<f64>() / total_candidates as f64
    };

    AnalysisResult {
        guess,
        total_candidates,
        partitions,
        worst_case,
        expected_remaining,
    }
}
