//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: board configuration, codes and
//! feedback scoring. Everything here is pure and deterministic.

mod code;
mod config;
mod feedback;

pub use code::{Code, CodeError};
pub use config::{ConfigError, GameConfig, MAX_COLORS, MAX_POSITIONS, MAX_UNIVERSE_SIZE};
pub use feedback::{Feedback, FeedbackError, score};
