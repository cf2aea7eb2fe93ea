//! Mastermind Solver
//!
//! Breaks Mastermind codes with Knuth's minimax strategy: every guess minimizes the
//! worst-case number of secrets that could remain. The classic game (4 positions,
//! 6 colors) is always solved in at most 5 guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_minimax::core::{Code, score};
//! use mastermind_minimax::solver::{Solver, Step};
//!
//! let secret: Code = "3632".parse().unwrap();
//! let mut solver = Solver::new();
//!
//! let turns = loop {
//!     let feedback = score(&solver.current_guess(), &secret);
//!     if let Step::Solved { turns, .. } = solver.submit_feedback(feedback).unwrap() {
//!         break turns;
//!     }
//! };
//! assert!(turns <= 5);
//! ```

// Core domain types
pub mod core;

// Code enumeration
pub mod universe;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
