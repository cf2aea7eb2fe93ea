//! The code universe
//!
//! Every code a board admits, enumerated once in lexicographic order. The classic
//! universe is built lazily and shared process-wide; other boards build their own.

mod builder;

pub use builder::{build_universe, build_universe_for};

use crate::core::{Code, GameConfig};
use once_cell::sync::Lazy;

static CLASSIC: Lazy<Universe> = Lazy::new(|| Universe::new(GameConfig::CLASSIC));

/// All codes of one board configuration
///
/// Read-only after construction; sessions borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    config: GameConfig,
    codes: Vec<Code>,
}

impl Universe {
    /// Enumerate all codes for `config`
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            codes: build_universe_for(config),
        }
    }

    /// The shared classic (4 positions, 6 colors) universe
    #[must_use]
    pub fn classic() -> &'static Self {
        &CLASSIC
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// All codes in enumeration order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Parse a code for this universe's board
    ///
    /// # Errors
    /// Returns `CodeError` if the text is not a valid code for the board.
    pub fn parse_code(&self, text: &str) -> Result<Code, crate::core::CodeError> {
        Code::parse(text, self.config)
    }
}
