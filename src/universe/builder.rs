//! Code enumeration

use crate::core::{Code, GameConfig};

/// Build the classic 6 color, 4 position universe (1296 codes)
///
/// Deterministic: the same codes in the same lexicographic order on every call.
///
/// # Examples
/// ```
/// use mastermind_minimax::universe::build_universe;
///
/// let codes = build_universe();
/// assert_eq!(codes.len(), 1296);
/// assert_eq!(codes[0].to_string(), "1 1 1 1");
/// ```
#[must_use]
pub fn build_universe() -> Vec<Code> {
    build_universe_for(GameConfig::CLASSIC)
}

/// Build the universe of any validated board
#[must_use]
pub fn build_universe_for(config: GameConfig) -> Vec<Code> {
    (0..config.universe_size())
        .map(|index| Code::from_index(index, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn classic_size() {
        assert_eq!(build_universe().len(), 1296);
    }

    #[test]
    fn codes_are_distinct_and_sorted() {
        let codes = build_universe();
        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(build_universe(), build_universe());
    }

    #[test]
    fn every_code_is_valid_for_board() {
        let config = GameConfig::new(5, 3).unwrap();
        let codes = build_universe_for(config);
        assert_eq!(codes.len(), 243);
        for code in &codes {
            assert_eq!(Code::new(code.pegs(), config), Ok(*code));
        }
    }
}
