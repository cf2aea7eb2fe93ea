//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_pegs};
use crate::commands::{AnalysisResult, SolveResult};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of a self-play game
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn print_solve_result<W: Write>(
    result: &SolveResult,
    verbose: bool,
    out: &mut W,
) -> io::Result<()> {
    let positions = result.secret.len();

    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Hidden secret: {}",
        result.secret.to_string().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for (i, step) in result.guesses.iter().enumerate() {
        writeln!(
            out,
            "\nGuess {}: {}  feedback {}  {}",
            i + 1,
            step.guess.to_string().bright_white().bold(),
            step.feedback,
            feedback_to_pegs(step.feedback, positions)
        )?;

        if verbose {
            writeln!(
                out,
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            )?;
            if let Some(worst_case) = step.worst_case {
                writeln!(out, "  Worst case: {worst_case}")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!(
            "✅ Solved in {} {}!",
            result.turns(),
            if result.turns() == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold()
    )?;

    writeln!(out, "\nFull guess sequence:")?;
    for (i, step) in result.guesses.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, step.guess)?;
    }

    Ok(())
}

/// Print the result of guess analysis
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn print_analysis_result<W: Write>(result: &AnalysisResult, out: &mut W) -> io::Result<()> {
    let positions = result.guess.len();

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(out, "\n📊 Against {} possible secrets:", result.total_candidates)?;
    writeln!(out, "   Feedback classes: {}", result.partitions.len())?;
    writeln!(
        out,
        "   Worst case:       {}",
        result.worst_case.to_string().bright_yellow()
    )?;
    writeln!(
        out,
        "   Expected remain:  {:.1} candidates",
        result.expected_remaining
    )?;

    writeln!(out)?;
    for &(feedback, size) in &result.partitions {
        let bar = create_progress_bar(size as f64, result.worst_case as f64, 30);
        writeln!(
            out,
            "   {} ({feedback})  [{}] {size:5}",
            feedback_to_pegs(feedback, positions),
            bar.green()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{analyze_code, solve_secret};
    use crate::universe::Universe;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn solve_result_lists_every_guess() {
        let result = solve_secret(Universe::classic(), "6666".parse().unwrap()).unwrap();
        let text = render(|out| print_solve_result(&result, true, out));

        assert!(text.contains("Hidden secret: 6 6 6 6"));
        assert!(text.contains("Guess 1: 1 1 2 2  feedback 0 0  ····"));
        assert!(text.contains("Candidates: 1296 → 256"));
        assert!(text.contains("Solved in 3 guesses!"));
        assert!(text.contains("  3. 6 6 6 6"));
    }

    #[test]
    fn analysis_lists_partitions() {
        let result = analyze_code("1122", Universe::classic()).unwrap();
        let text = render(|out| print_analysis_result(&result, out));

        assert!(text.contains("Against 1296 possible secrets"));
        assert!(text.contains("Feedback classes: 13"));
        assert!(text.contains("Worst case:       256"));
        assert!(text.contains("●●●● (4 0)"));
    }
}
