//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Render feedback as key pegs: `●` exact, `○` partial, `·` empty
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback, positions: usize) -> String {
    let exact = usize::from(feedback.exact).min(positions);
    let partial = usize::from(feedback.partial).min(positions - exact);

    let mut result = String::with_capacity(positions * 3);
    result.push_str(&"●".repeat(exact));
    result.push_str(&"○".repeat(partial));
    result.push_str(&"·".repeat(positions - exact - partial));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_no_match() {
        assert_eq!(feedback_to_pegs(Feedback::new(0, 0), 4), "····");
    }

    #[test]
    fn pegs_mixed() {
        assert_eq!(feedback_to_pegs(Feedback::new(2, 1), 4), "●●○·");
    }

    #[test]
    fn pegs_solved() {
        assert_eq!(feedback_to_pegs(Feedback::solved(4), 4), "●●●●");
    }

    #[test]
    fn pegs_clamped_to_board() {
        assert_eq!(feedback_to_pegs(Feedback::new(3, 3), 4), "●●●○");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
