//! Board configuration
//!
//! The classic game uses 4 positions and 6 colors. Other sizes are accepted as long as
//! the resulting code universe stays small enough for an exhaustive minimax scan.

use std::fmt;
use thiserror::Error;

/// Largest supported number of peg positions
pub const MAX_POSITIONS: usize = 8;

/// Largest supported number of colors (symbols are rendered as single digits)
pub const MAX_COLORS: u8 = 9;

/// Upper bound on `colors ^ positions`
///
/// Guess selection is quadratic in the universe size.
pub const MAX_UNIVERSE_SIZE: usize = 10_000;

/// Error type for invalid board configurations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("positions must be between 1 and {max}, got {0}", max = MAX_POSITIONS)]
    InvalidPositions(usize),
    #[error("colors must be between 1 and {max}, got {0}", max = MAX_COLORS)]
    InvalidColors(u8),
    #[error(
        "{colors} colors over {positions} positions gives more than {max} codes",
        max = MAX_UNIVERSE_SIZE
    )]
    UniverseTooLarge { positions: usize, colors: u8 },
}

/// Shape of a game: how many pegs a code has and how many colors each peg can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    positions: usize,
    colors: u8,
}

impl GameConfig {
    /// The classic 4 position, 6 color game
    pub const CLASSIC: Self = Self {
        positions: 4,
        colors: 6,
    };

    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if either dimension is out of range or the universe
    /// would exceed [`MAX_UNIVERSE_SIZE`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::GameConfig;
    ///
    /// let config = GameConfig::new(4, 6).unwrap();
    /// assert_eq!(config.universe_size(), 1296);
    ///
    /// assert!(GameConfig::new(0, 6).is_err());
    /// assert!(GameConfig::new(8, 9).is_err());
    /// ```
    pub fn new(positions: usize, colors: u8) -> Result<Self, ConfigError> {
        if positions == 0 || positions > MAX_POSITIONS {
            return Err(ConfigError::InvalidPositions(positions));
        }
        if colors == 0 || colors > MAX_COLORS {
            return Err(ConfigError::InvalidColors(colors));
        }

        let size = (0..positions).try_fold(1usize, |acc, _| {
            acc.checked_mul(usize::from(colors))
                .filter(|&n| n <= MAX_UNIVERSE_SIZE)
        });
        if size.is_none() {
            return Err(ConfigError::UniverseTooLarge { positions, colors });
        }

        Ok(Self { positions, colors })
    }

    #[inline]
    #[must_use]
    pub const fn positions(self) -> usize {
        self.positions
    }

    #[inline]
    #[must_use]
    pub const fn colors(self) -> u8 {
        self.colors
    }

    /// Number of distinct codes (`colors ^ positions`)
    #[must_use]
    pub fn universe_size(self) -> usize {
        usize::from(self.colors).pow(self.positions as u32)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} positions × {} colors", self.positions, self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_is_default() {
        assert_eq!(GameConfig::default(), GameConfig::CLASSIC);
        assert_eq!(GameConfig::CLASSIC.positions(), 4);
        assert_eq!(GameConfig::CLASSIC.colors(), 6);
        assert_eq!(GameConfig::CLASSIC.universe_size(), 1296);
    }

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert_eq!(
            GameConfig::new(0, 6),
            Err(ConfigError::InvalidPositions(0))
        );
        assert_eq!(
            GameConfig::new(9, 2),
            Err(ConfigError::InvalidPositions(9))
        );
        assert_eq!(GameConfig::new(4, 0), Err(ConfigError::InvalidColors(0)));
        assert_eq!(GameConfig::new(4, 10), Err(ConfigError::InvalidColors(10)));
    }

    #[test]
    fn rejects_oversized_universe() {
        assert_eq!(
            GameConfig::new(6, 6),
            Err(ConfigError::UniverseTooLarge {
                positions: 6,
                colors: 6
            })
        );
        // 9^4 = 6561 is the largest 4-peg game
        assert!(GameConfig::new(4, 9).is_ok());
        assert!(GameConfig::new(8, 3).is_ok()); // 6561
    }

    #[test]
    fn small_boards_are_valid() {
        let config = GameConfig::new(1, 1).unwrap();
        assert_eq!(config.universe_size(), 1);
    }
}
