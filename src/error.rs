//! Error taxonomy for the mosaic puzzle solver

use crate::puzzle::model::RelationKind;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// A malformed or self-contradictory puzzle specification.
///
/// Always raised before any constraint is built, so a caller can tell a
/// badly specified puzzle apart from a puzzle that merely has no solution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read puzzle file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("puzzle file line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("grid size must be a positive even number, got {0}")]
    InvalidSize(usize),

    #[error("cell ({row}, {col}) lies outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is given as both a white and a black clue")]
    ConflictingClues { row: usize, col: usize },

    #[error("{kind} relation links cell ({row}, {col}) to itself")]
    SelfRelation {
        kind: RelationKind,
        row: usize,
        col: usize,
    },
}

/// A failure of the solve stage, after the model validated cleanly.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The constraint set has no satisfying assignment. A valid terminal
    /// outcome, not a defect.
    #[error("the puzzle has no solution")]
    Unsatisfiable,

    /// The oracle gave up before reaching a conclusive answer. Never to be
    /// reported as "no solution".
    #[error("no conclusive answer within the {}s time limit", limit.as_secs())]
    Timeout { limit: Duration },

    /// A contract breach between components (e.g. an assignment missing a
    /// variable). A defect, not a user-facing condition.
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

/// Top-level error surface of the library.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}
