//! Mastermind Solver - CLI
//!
//! Knuth minimax code breaker with automatic and assisted modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_minimax::{
    commands::{
        AssistOutcome, MenuChoice, analyze_code, print_test_all_statistics, prompt_menu,
        run_assisted, run_autoplay, run_test_all, solve_secret,
    },
    core::GameConfig,
    output::{print_analysis_result, print_solve_result},
    universe::Universe,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code breaker using Knuth's minimax strategy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of peg positions
    #[arg(short, long, global = true, default_value_t = 4)]
    positions: usize,

    /// Number of colors (pegs are numbered 1..=colors)
    #[arg(short, long, global = true, default_value_t = 6)]
    colors: u8,

    /// Show candidate counts and worst cases for each turn
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// The computer picks a random secret and cracks it
    Auto {
        /// Seed for the secret, for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// You hold the secret and enter feedback for each guess
    Assist,

    /// Crack a specific secret
    Solve {
        /// The secret, e.g. 1234 or "1 2 3 4"
        code: String,
    },

    /// Show how a guess splits all possible secrets
    Analyze {
        /// The guess to analyze
        code: String,
    },

    /// Play every possible secret and report statistics
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::new(cli.positions, cli.colors)?;

    // The classic board reuses the shared universe
    let owned;
    let universe = if config == GameConfig::CLASSIC {
        Universe::classic()
    } else {
        owned = Universe::new(config);
        &owned
    };

    let command = match cli.command {
        Some(command) => command,
        None => match prompt_menu(io::stdin().lock(), &mut io::stdout())? {
            MenuChoice::Auto => Commands::Auto { seed: None },
            MenuChoice::Assisted => Commands::Assist,
            MenuChoice::Quit => {
                println!("Goodbye.");
                return Ok(());
            }
        },
    };

    match command {
        Commands::Auto { seed } => run_auto_command(universe, seed, cli.verbose),
        Commands::Assist => run_assist_command(universe, cli.verbose),
        Commands::Solve { code } => run_solve_command(universe, &code, cli.verbose),
        Commands::Analyze { code } => run_analyze_command(universe, &code),
        Commands::TestAll { limit } => run_test_all_command(universe, limit),
    }
}

fn run_auto_command(universe: &Universe, seed: Option<u64>, verbose: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let result = run_autoplay(universe, &mut rng)?;
    print_solve_result(&result, verbose, &mut io::stdout())?;
    Ok(())
}

fn run_solve_command(universe: &Universe, code: &str, verbose: bool) -> Result<()> {
    let secret = universe.parse_code(code)?;
    let result = solve_secret(universe, secret)?;
    print_solve_result(&result, verbose, &mut io::stdout())?;
    Ok(())
}

fn run_assist_command(universe: &Universe, verbose: bool) -> Result<()> {
    let mut stdout = io::stdout();
    let outcome = run_assisted(universe, io::stdin().lock(), &mut stdout, verbose)?;
    stdout.flush()?;

    if let AssistOutcome::Contradiction { turn } = outcome {
        anyhow::bail!("feedback became contradictory at turn {turn}");
    }
    Ok(())
}

fn run_analyze_command(universe: &Universe, code: &str) -> Result<()> {
    let result = analyze_code(code, universe)?;
    print_analysis_result(&result, &mut io::stdout())?;
    Ok(())
}

fn run_test_all_command(universe: &Universe, limit: Option<usize>) -> Result<()> {
    println!("\n{}", "═".repeat(60));
    println!(" Exhaustive Mastermind Solver Test ");
    println!("{}", "═".repeat(60));
    println!(
        "\nBoard: {}, {} possible secrets",
        universe.config(),
        universe.len()
    );

    let stats = run_test_all(universe, limit, true)?;
    print_test_all_statistics(&stats, &mut io::stdout())?;
    Ok(())
}
