//! Mastermind code representation
//!
//! A Code is a fixed-length row of colored pegs. Colors are the symbols `1..=colors`.

use super::config::{GameConfig, MAX_COLORS, MAX_POSITIONS};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code must have exactly {expected} pegs, got {got}")]
    InvalidLength { expected: usize, got: usize },
    #[error("color {color} is outside 1..={colors}")]
    ColorOutOfRange { color: u8, colors: u8 },
    #[error("'{0}' is not a color")]
    InvalidSymbol(String),
}

/// A secret, guess or candidate
///
/// Stored inline so codes are `Copy` and cheap to compare. Unused trailing slots are
/// always zero, which keeps the derived `Eq`, `Hash` and `Ord` consistent. Ordering
/// is lexicographic over the pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    pegs: [u8; MAX_POSITIONS],
    len: u8,
}

impl Code {
    /// Create a code from its pegs, validated against a configuration
    ///
    /// # Errors
    /// Returns `CodeError` if the number of pegs does not match the board or a peg is
    /// outside `1..=colors`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, GameConfig};
    ///
    /// let code = Code::new(&[1, 2, 3, 4], GameConfig::CLASSIC).unwrap();
    /// assert_eq!(code.pegs(), &[1, 2, 3, 4]);
    ///
    /// assert!(Code::new(&[1, 2, 3], GameConfig::CLASSIC).is_err());
    /// assert!(Code::new(&[1, 2, 3, 7], GameConfig::CLASSIC).is_err());
    /// ```
    pub fn new(pegs: &[u8], config: GameConfig) -> Result<Self, CodeError> {
        if pegs.len() != config.positions() {
            return Err(CodeError::InvalidLength {
                expected: config.positions(),
                got: pegs.len(),
            });
        }

        if let Some(&color) = pegs.iter().find(|&&c| c == 0 || c > config.colors()) {
            return Err(CodeError::ColorOutOfRange {
                color,
                colors: config.colors(),
            });
        }

        let mut slots = [0u8; MAX_POSITIONS];
        slots[..pegs.len()].copy_from_slice(pegs);

        Ok(Self {
            pegs: slots,
            len: pegs.len() as u8,
        })
    }

    /// Build the code at `index` in lexicographic enumeration order
    ///
    /// The first peg is the most significant digit, so index 0 is `1 1 .. 1`.
    pub(crate) fn from_index(mut index: usize, config: GameConfig) -> Self {
        let base = usize::from(config.colors());
        let mut pegs = [0u8; MAX_POSITIONS];

        for slot in pegs[..config.positions()].iter_mut().rev() {
            *slot = (index % base) as u8 + 1;
            index /= base;
        }

        Self {
            pegs,
            len: config.positions() as u8,
        }
    }

    /// The canonical opening guess
    ///
    /// Two blocks of two distinct colors: the first half of the pegs is color 1 and the
    /// rest color 2 (`1 1 2 2` for the classic game). A single-color board opens with
    /// color 1 everywhere.
    #[must_use]
    pub fn opening(config: GameConfig) -> Self {
        let positions = config.positions();
        let second = if config.colors() > 1 { 2 } else { 1 };
        let mut pegs = [0u8; MAX_POSITIONS];

        for (i, slot) in pegs[..positions].iter_mut().enumerate() {
            *slot = if i < positions.div_ceil(2) { 1 } else { second };
        }

        Self {
            pegs,
            len: positions as u8,
        }
    }

    /// Parse a code such as `1122`, `1 1 2 2`, `1,1,2,2` or `(1, 1, 2, 2)`
    ///
    /// # Errors
    /// Returns `CodeError` for unknown symbols, wrong length or out-of-range colors.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, GameConfig};
    ///
    /// let a = Code::parse("1122", GameConfig::CLASSIC).unwrap();
    /// let b = Code::parse("(1, 1, 2, 2)", GameConfig::CLASSIC).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(text: &str, config: GameConfig) -> Result<Self, CodeError> {
        let trimmed = text
            .trim()
            .trim_start_matches(['(', '['])
            .trim_end_matches([')', ']']);

        let tokens: Vec<&str> = trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let pegs = if tokens.len() == 1 {
            // Compact form: one digit per peg
            tokens[0]
                .chars()
                .map(|ch| {
                    ch.to_digit(10)
                        .map(|d| d as u8)
                        .ok_or_else(|| CodeError::InvalidSymbol(ch.to_string()))
                })
                .collect::<Result<Vec<u8>, _>>()?
        } else {
            tokens
                .iter()
                .map(|t| {
                    t.parse::<u8>()
                        .map_err(|_| CodeError::InvalidSymbol((*t).to_string()))
                })
                .collect::<Result<Vec<u8>, _>>()?
        };

        Self::new(&pegs, config)
    }

    /// The pegs of this code
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[u8] {
        &self.pegs[..usize::from(self.len)]
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Occurrences of each color, indexed by color value
    #[inline]
    pub(crate) fn color_counts(&self) -> [u8; MAX_COLORS as usize + 1] {
        let mut counts = [0u8; MAX_COLORS as usize + 1];
        for &peg in self.pegs() {
            counts[usize::from(peg)] += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in self.pegs().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parses a code for the classic board
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, GameConfig::CLASSIC)
    }
}
