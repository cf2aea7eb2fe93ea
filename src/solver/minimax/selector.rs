//! Minimax-based guess selection
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_worst_case;
use crate::core::Code;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Every code in `guess_pool` is scored, not only the candidates. Among the codes
/// sharing the lowest worst case, the first one (in pool order) that is itself a
/// candidate wins; if none is, the first minimizer wins. Pool order is the tie-break,
/// so results are reproducible.
///
/// Returns the chosen code and its worst case, or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::Code;
/// use mastermind_minimax::solver::minimax::select_best_guess;
///
/// let pool: Vec<Code> = ["3333", "1112"].iter().map(|c| c.parse().unwrap()).collect();
/// let candidates: Vec<Code> = ["1111", "2222"].iter().map(|c| c.parse().unwrap()).collect();
///
/// let (best, worst_case) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.to_string(), "1 1 1 2");
/// assert_eq!(worst_case, 1);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Code], candidates: &[Code]) -> Option<(Code, usize)> {
    let remaining: FxHashSet<&Code> = candidates.iter().collect();

    // Collecting keeps pool order, which the tie-break depends on
    let scored: Vec<_> = guess_pool
        .par_iter()
        .map(|guess| {
            let worst_case = calculate_worst_case(guess, candidates);
            (guess, worst_case, remaining.contains(guess))
        })
        .collect();

    let best = scored.iter().map(|&(_, worst_case, _)| worst_case).min()?;

    let tied: Vec<_> = scored
        .into_iter()
        .filter(|&(_, worst_case, _)| worst_case == best)
        .collect();

    // A tied code that could be the secret may end the game one turn sooner
    tied.iter()
        .find(|&&(_, _, is_candidate)| is_candidate)
        .or_else(|| tied.first())
        .map(|&(guess, _, _)| (*guess, best))
}

/// Pick the next guess for a non-empty candidate set
///
/// With a single candidate left it is guessed directly.
#[must_use]
pub fn choose_next_guess(guess_pool: &[Code], candidates: &[Code]) -> Option<(Code, usize)> {
    match candidates {
        [] => None,
        [only] => Some((*only, 1)),
        _ => select_best_guess(guess_pool, candidates),
    }
}
