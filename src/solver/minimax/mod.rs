//! Knuth's minimax guess selection
//!
//! Implements worst-case minimization over the full code universe.

mod calculator;
mod selector;

pub use calculator::{calculate_worst_case, partition_sizes};
pub use selector::{choose_next_guess, select_best_guess};
