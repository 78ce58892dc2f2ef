//! Command line interface for the mosaic puzzle solver

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mosaic_solver::{
    config::{CliOverrides, Settings, SolverBackend},
    error::{PuzzleError, SolveError},
    puzzle::create_example_puzzles,
    solve::PuzzleProblem,
    utils::{ColorOutput, GridFormatter},
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "mosaic_solver")]
#[command(about = "Mosaic logic puzzle SAT solver")]
#[command(version = "0.1.0")]
struct Cli {
    /// Puzzle file to solve
    puzzle: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Solver backend (overrides config)
    #[arg(short, long, value_enum)]
    backend: Option<BackendArg>,

    /// Solve timeout in seconds (overrides config)
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Save the solution into this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Create example puzzle files in the given directory and exit
    #[arg(long, value_name = "DIR")]
    setup: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    Cadical,
    Backtracking,
}

impl From<BackendArg> for SolverBackend {
    fn from(backend: BackendArg) -> Self {
        match backend {
            BackendArg::Cadical => SolverBackend::Cadical,
            BackendArg::Backtracking => SolverBackend::Backtracking,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(directory) = cli.setup {
        return setup_command(directory);
    }

    let Some(puzzle_file) = cli.puzzle else {
        anyhow::bail!("no puzzle file given (try --help)");
    };

    solve_command(
        puzzle_file,
        cli.config,
        cli.backend.map(SolverBackend::from),
        cli.timeout,
        cli.output,
        cli.verbose,
    )
}

fn solve_command(
    puzzle_file: PathBuf,
    config_path: Option<PathBuf>,
    backend: Option<SolverBackend>,
    timeout_seconds: Option<u64>,
    output_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = match config_path {
        Some(path) => Settings::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Settings::default(),
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        puzzle_file: Some(puzzle_file),
        backend,
        timeout_seconds,
        output_dir,
    };
    settings.merge_with_cli(&cli_overrides);

    settings
        .validate()
        .context("Configuration validation failed")?;

    let start_time = Instant::now();
    let mut problem = PuzzleProblem::new(settings.clone())?;

    if verbose {
        println!("{}", GridFormatter::format_puzzle_summary(problem.model()));
    }

    let grid = match problem.solve() {
        Ok(grid) => grid,
        Err(PuzzleError::Solve(SolveError::Unsatisfiable)) => {
            eprintln!("{}", ColorOutput::error("No solution exists"));
            std::process::exit(1);
        }
        Err(error) => return Err(error.into()),
    };

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Solved in {:.3}s",
            start_time.elapsed().as_secs_f64()
        ))
    );
    print!("{}", GridFormatter::format_grid(&grid));

    if settings.output.save_solution {
        let path = GridFormatter::save_solution(
            &grid,
            &settings.output.output_directory,
            settings.output.format,
        )
        .context("Failed to save solution")?;
        println!("Solution saved to {}", path.display());
    }

    if verbose {
        println!("\n{}", problem.encoding_statistics());
    }

    Ok(())
}

fn setup_command(directory: PathBuf) -> Result<()> {
    let puzzle_dir = directory.join("input/puzzles");
    create_example_puzzles(&puzzle_dir)
        .with_context(|| format!("Failed to create examples in {}", puzzle_dir.display()))?;

    println!("Created example puzzles in {}", puzzle_dir.display());
    println!("Next: cargo run -- {}", puzzle_dir.join("simple.csv").display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "mosaic_solver",
            "puzzle.csv",
            "--backend",
            "backtracking",
            "--timeout",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.puzzle, Some(PathBuf::from("puzzle.csv")));
        assert!(matches!(cli.backend, Some(BackendArg::Backtracking)));
        assert_eq!(cli.timeout, Some(5));
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempfile::tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf()).unwrap();
        assert!(temp_dir.path().join("input/puzzles/simple.csv").exists());
    }
}
