//! Mastermind solving
//!
//! The minimax guess selection and the per-game solver session built on it.

mod engine;
pub mod minimax;

pub use engine::{Solver, SolverError, Step, Turn};
