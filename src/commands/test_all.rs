//! Test all secrets - exhaustive solver evaluation
//!
//! Plays every code in the universe as the secret and gathers statistics. The
//! solver is deterministic, so its state depends only on the feedback seen so far;
//! sessions are cached per feedback path and each position is searched once.

use crate::core::{Code, Feedback, score};
use crate::solver::{Solver, SolverError};
use crate::universe::Universe;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Secrets that needed `max_guesses`, in enumeration order (at most 10)
    pub hardest: Vec<Code>,
    /// Distinct solver positions searched
    pub positions_searched: usize,
}

/// Run the solver on every secret of the universe (or the first `limit`)
///
/// # Errors
///
/// Returns `SolverError` if the solver rejects generated feedback, which would mean
/// the scorer and the solver disagree.
pub fn run_test_all(
    universe: &Universe,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<TestAllStatistics, SolverError> {
    let secrets: Vec<Code> = universe
        .codes()
        .iter()
        .take(limit.unwrap_or(universe.len()))
        .copied()
        .collect();
    let positions = universe.config().positions();

    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut cache: FxHashMap<Vec<Feedback>, Solver<'_>> = FxHashMap::default();
    let mut turns_per_secret: Vec<(Code, usize)> = Vec::with_capacity(secrets.len());

    for (idx, &secret) in secrets.iter().enumerate() {
        let mut solver = Solver::with_universe(universe);
        let mut path: Vec<Feedback> = Vec::new();

        let turns = loop {
            let feedback = score(&solver.current_guess(), &secret);
            if feedback.is_solved(positions) {
                break solver.turn();
            }

            path.push(feedback);
            solver = if let Some(cached) = cache.get(&path) {
                cached.clone()
            } else {
                solver.submit_feedback(feedback)?;
                cache.insert(path.clone(), solver.clone());
                solver
            };
        };

        turns_per_secret.push((secret, turns));

        if idx % 50 == 0 {
            let avg = turns_per_secret.iter().map(|&(_, t)| t).sum::<usize>() as f64
                / turns_per_secret.len() as f64;
            pb.set_message(format!("Avg: {avg:.3}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let mut guess_distribution = BTreeMap::new();
    for &(_, turns) in &turns_per_secret {
        *guess_distribution.entry(turns).or_insert(0) += 1;
    }

    let total_guesses: usize = turns_per_secret.iter().map(|&(_, t)| t).sum();
    let max_guesses = turns_per_secret.iter().map(|&(_, t)| t).max().unwrap_or(0);
    let min_guesses = turns_per_secret.iter().map(|&(_, t)| t).min().unwrap_or(0);
    let average_guesses = if turns_per_secret.is_empty() {
        0.0
    } else {
        total_guesses as f64 / turns_per_secret.len() as f64
    };

    let hardest = turns_per_secret
        .iter()
        .filter(|&&(_, t)| t == max_guesses)
        .map(|&(code, _)| code)
        .take(10)
        .collect();

    Ok(TestAllStatistics {
        total_codes: turns_per_secret.len(),
        guess_distribution,
        total_time: start.elapsed(),
        average_guesses,
        max_guesses,
        min_guesses,
        hardest,
        positions_searched: cache.len(),
    })
}

/// Print test-all statistics
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn print_test_all_statistics<W: Write>(stats: &TestAllStatistics, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60))?;
    writeln!(out, " Test Results ")?;
    writeln!(out, "{}", "═".repeat(60))?;

    writeln!(out, "\n📊 {}", "Overall Performance".bright_cyan().bold())?;
    writeln!(out, "  Secrets tested:      {}", stats.total_codes)?;
    writeln!(
        out,
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    )?;
    writeln!(out, "  Best case:           {}", stats.min_guesses)?;
    writeln!(out, "  Worst case:          {}", stats.max_guesses)?;
    writeln!(out, "  Positions searched:  {}", stats.positions_searched)?;
    writeln!(
        out,
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    )?;

    writeln!(out, "\n📈 {}", "Guess Distribution".bright_cyan().bold())?;
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (&guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.total_codes.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        writeln!(out, "  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)")?;
    }

    if !stats.hardest.is_empty() {
        writeln!(
            out,
            "\n😰 {}",
            format!("Hardest Secrets ({} guesses)", stats.max_guesses)
                .yellow()
                .bold()
        )?;
        for code in &stats.hardest {
            writeln!(out, "  {}", code.to_string().yellow())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn classic_game_never_needs_more_than_five() {
        let stats = run_test_all(Universe::classic(), None, false).unwrap();

        assert_eq!(stats.total_codes, 1296);
        assert_eq!(stats.max_guesses, 5);
        assert_eq!(stats.min_guesses, 1);

        let expected: BTreeMap<usize, usize> =
            [(1, 1), (2, 6), (3, 62), (4, 533), (5, 694)].into_iter().collect();
        assert_eq!(stats.guess_distribution, expected);

        // Knuth's mean of 5801 / 1296
        assert!((stats.average_guesses - 5801.0 / 1296.0).abs() < 1e-9);
        assert_eq!(stats.hardest.len(), 10);
    }

    #[test]
    fn limit_restricts_secrets() {
        let stats = run_test_all(Universe::classic(), Some(10), false).unwrap();
        assert_eq!(stats.total_codes, 10);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 10);
        assert!(stats.average_guesses >= stats.min_guesses as f64);
        assert!(stats.average_guesses <= stats.max_guesses as f64);
    }

    #[test]
    fn small_board_statistics() {
        let universe = Universe::new(GameConfig::new(2, 2).unwrap());
        let stats = run_test_all(&universe, None, false).unwrap();
        assert_eq!(stats.total_codes, 4);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 4);
        assert!(stats.max_guesses <= 3);
    }

    #[test]
    fn empty_limit() {
        let stats = run_test_all(Universe::classic(), Some(0), false).unwrap();
        assert_eq!(stats.total_codes, 0);
        assert_eq!(stats.max_guesses, 0);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
        assert!(stats.hardest.is_empty());
    }

    #[test]
    fn statistics_print() {
        colored::control::set_override(false);
        let stats = run_test_all(Universe::classic(), Some(20), false).unwrap();
        let mut out = Vec::new();
        print_test_all_statistics(&stats, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Secrets tested:      20"));
        assert!(text.contains("Guess Distribution"));
    }
}
