//! Command implementations

pub mod analyze;
pub mod assisted;
pub mod menu;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_code, analyze_guess};
pub use assisted::{AssistOutcome, run_assisted};
pub use menu::{MenuChoice, prompt_menu};
pub use solve::{GuessStep, SolveResult, pick_secret, run_autoplay, solve_secret};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
