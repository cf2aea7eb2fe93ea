//! Assisted mode
//!
//! A human holds the secret and reports feedback for each suggested guess. Console
//! I/O goes through the `BufRead`/`Write` pair handed in, so the loop runs the same
//! against a terminal or an in-memory script.

use crate::core::{Code, Feedback};
use crate::solver::{Solver, SolverError, Step};
use crate::universe::Universe;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How an assisted session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistOutcome {
    /// The player reported an all-exact feedback
    Solved { code: Code, turns: usize },
    /// The player typed `exit`
    Exited,
    /// No code matches the feedback given
    Contradiction { turn: usize },
    /// Input ended before the game did
    InputClosed,
}

/// Run an assisted session until it is solved, abandoned or contradicted
///
/// Malformed feedback lines are reported and re-prompted without touching the
/// solver. `exit` (any case) ends the session early.
///
/// # Errors
/// Returns an I/O error if reading input or writing output fails.
///
/// # Examples
/// ```
/// use mastermind_minimax::commands::{AssistOutcome, run_assisted};
/// use mastermind_minimax::universe::Universe;
/// use std::io::Cursor;
///
/// let mut output = Vec::new();
/// let outcome = run_assisted(
///     Universe::classic(),
///     Cursor::new("1 1\n3 0\n4 0\n"),
///     &mut output,
///     false,
/// )
/// .unwrap();
///
/// assert!(matches!(outcome, AssistOutcome::Solved { turns: 3, .. }));
/// ```
pub fn run_assisted<R: BufRead, W: Write>(
    universe: &Universe,
    mut input: R,
    out: &mut W,
    verbose: bool,
) -> io::Result<AssistOutcome> {
    let config = universe.config();
    let mut solver = Solver::with_universe(universe);

    writeln!(out, "\n{}", "Mastermind - Assisted Mode".bright_cyan().bold())?;
    writeln!(
        out,
        "Colors are the numbers 1-{}, {} positions.",
        config.colors(),
        config.positions()
    )?;
    writeln!(
        out,
        "Enter feedback as \"exact partial\" (for example '2 1'). Type 'exit' to quit."
    )?;

    loop {
        writeln!(
            out,
            "\nTurn {}: {}",
            solver.turn(),
            solver.current_guess().to_string().bright_white().bold()
        )?;
        if verbose {
            write_details(out, &solver)?;
        }

        let Some(line) = read_line(&mut input, out, "Feedback (exact partial)")? else {
            return Ok(AssistOutcome::InputClosed);
        };

        if line.eq_ignore_ascii_case("exit") {
            writeln!(out, "Exited.")?;
            return Ok(AssistOutcome::Exited);
        }

        let feedback = match Feedback::parse(&line) {
            Ok(feedback) => feedback,
            Err(e) => {
                writeln!(out, "{} {e}", "Invalid input:".yellow())?;
                continue;
            }
        };

        match solver.submit_feedback(feedback) {
            Ok(Step::Next(_)) => {}
            Ok(Step::Solved { code, turns }) => {
                writeln!(
                    out,
                    "{}",
                    format!("Solved! The code is {code}, found in {turns} {}.", plural(turns))
                        .green()
                        .bold()
                )?;
                return Ok(AssistOutcome::Solved { code, turns });
            }
            Err(SolverError::ContradictoryFeedback { turn }) => {
                writeln!(
                    out,
                    "{}",
                    "No code matches that feedback. Please check the answers given."
                        .red()
                        .bold()
                )?;
                return Ok(AssistOutcome::Contradiction { turn });
            }
            Err(SolverError::AlreadySolved) => {
                return Ok(AssistOutcome::Solved {
                    code: solver.current_guess(),
                    turns: solver.turn(),
                });
            }
        }
    }
}

/// Candidate count and worst case for the current guess
fn write_details<W: Write>(out: &mut W, solver: &Solver<'_>) -> io::Result<()> {
    write!(out, "  {} candidates remaining", solver.remaining())?;
    if let Some(worst_case) = solver.last_worst_case() {
        write!(out, ", worst case {worst_case}")?;
    }
    writeln!(out)?;

    if solver.remaining() <= 10 {
        let listed: Vec<String> = solver.candidates().iter().map(Code::to_string).collect();
        writeln!(out, "  Candidates: {}", listed.join(" | "))?;
    }
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
pub(crate) fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub(crate) const fn plural(turns: usize) -> &'static str {
    if turns == 1 { "guess" } else { "guesses" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str, verbose: bool) -> (AssistOutcome, String) {
        colored::control::set_override(false);
        let mut output = Vec::new();
        let outcome =
            run_assisted(Universe::classic(), Cursor::new(script), &mut output, verbose).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn solves_with_honest_feedback() {
        // Secret 1234: 1122 -> 1 1, 1134 -> 3 0, 1234 -> 4 0
        let (outcome, output) = run("1 1\n3 0\n4 0\n", false);

        assert_eq!(
            outcome,
            AssistOutcome::Solved {
                code: "1234".parse().unwrap(),
                turns: 3
            }
        );
        assert!(output.contains("Turn 1: 1 1 2 2"));
        assert!(output.contains("Turn 2: 1 1 3 4"));
        assert!(output.contains("Solved! The code is 1 2 3 4, found in 3 guesses."));
    }

    #[test]
    fn malformed_input_reprompts_without_advancing() {
        let (outcome, output) = run("abc\n2\n1 2 3\n1 1\n3 0\n4 0\n", false);

        assert!(matches!(outcome, AssistOutcome::Solved { turns: 3, .. }));
        assert_eq!(output.matches("Invalid input:").count(), 3);
        assert_eq!(output.matches("Turn 1: 1 1 2 2").count(), 4);
    }

    #[test]
    fn over_count_feedback_is_contradiction() {
        // Parses as two numbers, so it is not re-prompted; no code can produce it
        let (outcome, output) = run("4 1\n4 0\n", false);
        assert_eq!(outcome, AssistOutcome::Contradiction { turn: 1 });
        assert!(output.contains("No code matches that feedback"));
        assert!(!output.contains("Invalid input:"));
    }

    #[test]
    fn exit_ends_session_in_any_case() {
        for script in ["exit\n", "EXIT\n", "0 0\n  Exit  \n"] {
            let (outcome, output) = run(script, false);
            assert_eq!(outcome, AssistOutcome::Exited);
            assert!(output.contains("Exited."));
        }
    }

    #[test]
    fn contradiction_is_reported_and_ends_session() {
        // 0 4 leaves only 2211, which is then said to share no colors
        let (outcome, output) = run("0 4\n0 0\n4 0\n", false);

        assert_eq!(outcome, AssistOutcome::Contradiction { turn: 2 });
        assert!(output.contains("No code matches that feedback"));
        assert!(!output.contains("Solved!"));
    }

    #[test]
    fn end_of_input_closes_session() {
        let (outcome, _) = run("1 1\n", false);
        assert_eq!(outcome, AssistOutcome::InputClosed);
    }

    #[test]
    fn verbose_lists_small_candidate_sets() {
        let (_, output) = run("0 4\n4 0\n", true);
        assert!(output.contains("1296 candidates remaining"));
        assert!(output.contains("1 candidates remaining, worst case 1"));
        assert!(output.contains("Candidates: 2 2 1 1"));
    }
}
