//! # sudoku-solver
//!
//! A command-line solver for generalized Sudoku puzzles (9x9, 16x16 and
//! 25x25 grids). Puzzles are plain text files: either N lines of N symbols
//! or a single line of N² symbols, with `.` or `0` for blanks and the digit
//! alphabet `1`-`9` then `A`-`P` for givens.
//!
//! The core drives each puzzle through constraint propagation first and
//! falls back to depth-first search only where propagation leaves squares
//! unresolved.
//!
//! ## Usage
//!
//! ```sh
//! # Solve one puzzle, detecting the grid order from the file's shape
//! sudoku-solver puzzle.txt
//!
//! # The same, with an explicit grid order and debug output
//! sudoku-solver solve --path puzzle.txt --order 16 --debug
//!
//! # Solve every puzzle file under a directory
//! sudoku-solver batch --path puzzles/
//! ```
//!
//! Exit status: 0 when every puzzle was solved, 1 when a puzzle has no
//! solution, 2 on configuration or parse errors.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use sudoku_solver::engine::solver::{Engine, SolveStats};
use sudoku_solver::puzzle::grid::{parse_puzzle_file, render_solution};
use tikv_jemalloc_ctl::{epoch, stats};
use walkdir::WalkDir;

/// Global allocator, matching the memory statistics reported after solving.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the solver.
#[derive(Parser, Debug)]
#[command(name = "sudoku-solver", version, about = "A constraint-propagation Sudoku solver")]
struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a puzzle file to solve.
    #[arg(global = true)]
    path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `solve`, `batch`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a single puzzle file.
    Solve {
        /// Path to the puzzle file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every puzzle file found under a directory.
    Batch {
        /// Directory to scan recursively for puzzle files.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },
}

/// Defines common command-line options shared across subcommands.
#[derive(Args, Debug, Default, Clone)]
struct CommonOptions {
    /// Explicit grid order (9, 16 or 25); overrides shape detection.
    #[arg(short, long)]
    order: Option<usize>,

    /// Enable debug output about the parsed puzzle.
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Re-check the solved grid against the one-digit-per-unit rule.
    #[arg(short, long, default_value_t = true)]
    verify: bool,

    /// Print solving statistics after each puzzle.
    #[arg(short, long, default_value_t = true)]
    stats: bool,

    /// Print the solved grid.
    #[arg(short, long, default_value_t = true)]
    print_solution: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // A bare path without a subcommand solves that file.
    if let Some(path) = cli.path.clone() {
        if cli.command.is_none() {
            std::process::exit(solve_one(&path, &cli.common));
        }
    }

    let code = match cli.command {
        Some(Commands::Solve { path, common }) => solve_one(&path, &common),
        Some(Commands::Batch { path, common }) => solve_batch(&path, &common),
        None => {
            eprintln!("No command provided. Use --help for more information.");
            2
        }
    };
    std::process::exit(code);
}

/// Solves a single puzzle file and reports the outcome. Returns the
/// process exit code.
fn solve_one(path: &Path, common: &CommonOptions) -> i32 {
    let parse_start = std::time::Instant::now();
    let puzzle = match parse_puzzle_file(path, common.order) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", path.display());
            return 2;
        }
    };
    let parse_time = parse_start.elapsed();

    println!("Solving: {}", path.display());
    if common.debug {
        println!("Parsed puzzle:\n{puzzle}");
        println!("Order: {}", puzzle.order());
        println!("Givens: {}", puzzle.given_count());
    }

    let mut engine = match Engine::new(puzzle.order()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {e}");
            return 2;
        }
    };

    epoch::advance().unwrap();
    let solve_start = std::time::Instant::now();
    let outcome = engine.solve(&puzzle.clues());
    let elapsed = solve_start.elapsed();

    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    match outcome {
        Ok(solution) => {
            if common.verify {
                let ok = solution.verify(engine.topology());
                println!("Verified: {ok:?}");
                assert!(ok, "solution failed verification!");
            }
            if common.stats {
                print_stats(
                    parse_time,
                    elapsed,
                    puzzle.order(),
                    puzzle.given_count(),
                    &engine.stats(),
                    allocated_mib,
                    resident_mib,
                );
            }
            if common.print_solution {
                println!("Solution:\n{}", render_solution(puzzle.order(), solution.digits()));
            }
            0
        }
        Err(e) if e.is_no_solution() => {
            if common.stats {
                print_stats(
                    parse_time,
                    elapsed,
                    puzzle.order(),
                    puzzle.given_count(),
                    &engine.stats(),
                    allocated_mib,
                    resident_mib,
                );
            }
            println!("No solution found ({e})");
            1
        }
        Err(e) => {
            eprintln!("Error: {e}");
            2
        }
    }
}

/// Solves every puzzle file under `dir` and prints a summary. Returns the
/// worst exit code seen.
fn solve_batch(dir: &Path, common: &CommonOptions) -> i32 {
    let mut solved = 0usize;
    let mut unsolved = 0usize;
    let mut failed = 0usize;
    let mut worst = 0;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Error scanning {}: {e}", dir.display());
                failed += 1;
                worst = worst.max(2);
                continue;
            }
        };
        if !entry.file_type().is_file()
            || entry.path().extension().is_none_or(|ext| ext != "txt")
        {
            continue;
        }
        let code = solve_one(entry.path(), common);
        match code {
            0 => solved += 1,
            1 => unsolved += 1,
            _ => failed += 1,
        }
        worst = worst.max(code);
        println!();
    }

    println!("=========================[ Batch Summary ]===========================");
    stat_line("Solved", solved);
    stat_line("No solution", unsolved);
    stat_line("Errors", failed);
    println!("=====================================================================");
    worst
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of puzzle and search statistics.
fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    order: usize,
    givens: usize,
    s: &SolveStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Puzzle Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Grid order", order);
    stat_line("Squares", order * order);
    stat_line("Givens", givens);

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Assignments", s.assignments, elapsed_secs);
    stat_line_with_rate("Eliminations", s.eliminations, elapsed_secs);
    stat_line_with_rate("Branches", s.branches, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use sudoku_solver::engine::error::SolveError;

    #[test]
    fn test_no_solution_errors_map_to_exit_code_one() {
        assert!(SolveError::Unsatisfiable.is_no_solution());
        assert!(SolveError::Exhausted.is_no_solution());
    }
}
