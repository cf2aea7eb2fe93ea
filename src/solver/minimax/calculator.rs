//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::{Code, Feedback, score};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each feedback that could result from this guess:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind_minimax::core::Code;
/// use mastermind_minimax::solver::minimax::calculate_worst_case;
///
/// let guess: Code = "1122".parse().unwrap();
/// let candidates: Vec<Code> = ["1111", "2222", "3333"]
///     .iter()
///     .map(|c| c.parse().unwrap())
///     .collect();
///
/// // 1111 and 2222 both score 2 exact; 3333 scores nothing
/// assert_eq!(calculate_worst_case(&guess, &candidates), 2);
/// ```
#[must_use]
pub fn calculate_worst_case(guess: &Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    group_by_feedback(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Sizes of the classes the guess splits the candidates into, ordered by feedback
#[must_use]
pub fn partition_sizes(guess: &Code, candidates: &[Code]) -> Vec<(Feedback, usize)> {
    let mut sizes: Vec<(Feedback, usize)> =
        group_by_feedback(guess, candidates).into_iter().collect();
    sizes.sort_unstable();
    sizes
}

/// Group candidates by the feedback they produce against the guess
fn group_by_feedback(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts.entry(score(guess, candidate)).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::build_universe;

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn worst_case_perfect_split() {
        let guess: Code = "1234".parse().unwrap();
        let candidates = codes(&["1234", "5656"]);
        assert_eq!(calculate_worst_case(&guess, &candidates), 1);
    }

    #[test]
    fn worst_case_all_same_feedback() {
        let guess: Code = "6666".parse().unwrap();
        let candidates = codes(&["1111", "2222", "3333"]);
        assert_eq!(calculate_worst_case(&guess, &candidates), 3);
    }

    #[test]
    fn worst_case_empty_candidates() {
        let guess: Code = "1122".parse().unwrap();
        assert_eq!(calculate_worst_case(&guess, &[]), 0);
    }

    #[test]
    fn opening_partitions_classic_universe() {
        // Knuth's table for 1122 against all 1296 codes
        let guess: Code = "1122".parse().unwrap();
        let universe = build_universe();
        let sizes = partition_sizes(&guess, &universe);

        assert_eq!(sizes.len(), 13);
        assert_eq!(sizes.iter().map(|(_, n)| n).sum::<usize>(), 1296);
        assert_eq!(calculate_worst_case(&guess, &universe), 256);
        assert!(sizes.contains(&(Feedback::new(0, 0), 256)));
        assert!(sizes.contains(&(Feedback::new(1, 1), 208)));
        assert!(sizes.contains(&(Feedback::new(3, 0), 20)));
        assert!(sizes.contains(&(Feedback::new(4, 0), 1)));
    }

    #[test]
    fn partition_sizes_are_sorted_by_feedback() {
        let guess: Code = "1234".parse().unwrap();
        let sizes = partition_sizes(&guess, &build_universe());
        assert!(sizes.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn minimax_prefers_better_splits() {
        let candidates = codes(&["1111", "2222"]);

        // Doesn't distinguish between candidates
        let bad_guess: Code = "3333".parse().unwrap();
        // One of the candidates, guarantees a split
        let good_guess: Code = "1111".parse().unwrap();

        assert!(
            calculate_worst_case(&good_guess, &candidates)
                < calculate_worst_case(&bad_guess, &candidates)
        );
    }
}
