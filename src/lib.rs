//! Mosaic puzzle SAT solver
//!
//! Solves N×N binary-grid "mosaic" puzzles: every row and column holds
//! equally many white and black cells, no three consecutive cells share a
//! color, all rows and columns are pairwise distinct, and the input may pin
//! cells to a color or relate arbitrary cell pairs as equal or different.
//! The rules are encoded to CNF and handed to a SAT oracle (CaDiCaL, or a
//! bundled backtracking solver for small grids).

pub mod config;
pub mod error;
pub mod puzzle;
pub mod sat;
pub mod solve;
pub mod utils;

pub use config::Settings;
pub use error::{ConfigError, PuzzleError, SolveError};
pub use puzzle::{PuzzleModel, SolvedGrid};
pub use solve::PuzzleProblem;

/// Main entry point: load the configured puzzle, solve it, and return the
/// colored grid
pub fn solve_puzzle(settings: Settings) -> Result<SolvedGrid, PuzzleError> {
    let mut problem = PuzzleProblem::new(settings)?;
    problem.solve()
}
