//! Independent validation of solved grids
//!
//! Re-checks a decoded grid against every puzzle rule without consulting
//! the SAT encoding. Used defensively after each solve and heavily by the
//! test suite.

use crate::puzzle::{Cell, CellColor, PuzzleModel, Relation, SolvedGrid};
use itertools::Itertools;
use std::fmt;

pub struct SolutionValidator {
    model: PuzzleModel,
}

/// Result of validating a solved grid
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<RuleViolation>,
}

/// A specific rule broken by a candidate grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    UnbalancedRow {
        row: usize,
        white_count: usize,
    },
    UnbalancedColumn {
        col: usize,
        white_count: usize,
    },
    /// Three same-colored cells starting at (row, col), running right
    HorizontalRun {
        row: usize,
        col: usize,
    },
    /// Three same-colored cells starting at (row, col), running down
    VerticalRun {
        row: usize,
        col: usize,
    },
    DuplicateRows {
        first: usize,
        second: usize,
    },
    DuplicateColumns {
        first: usize,
        second: usize,
    },
    ClueMismatch {
        cell: Cell,
        expected: CellColor,
    },
    RelationViolated {
        relation: Relation,
    },
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleViolation::SizeMismatch { expected, actual } => {
                write!(f, "grid is {}x{}, puzzle expects {}x{}", actual, actual, expected, expected)
            }
            RuleViolation::UnbalancedRow { row, white_count } => {
                write!(f, "row {} has {} white cells", row, white_count)
            }
            RuleViolation::UnbalancedColumn { col, white_count } => {
                write!(f, "column {} has {} white cells", col, white_count)
            }
            RuleViolation::HorizontalRun { row, col } => {
                write!(f, "three same-colored cells in row {} starting at column {}", row, col)
            }
            RuleViolation::VerticalRun { row, col } => {
                write!(f, "three same-colored cells in column {} starting at row {}", col, row)
            }
            RuleViolation::DuplicateRows { first, second } => {
                write!(f, "rows {} and {} are identical", first, second)
            }
            RuleViolation::DuplicateColumns { first, second } => {
                write!(f, "columns {} and {} are identical", first, second)
            }
            RuleViolation::ClueMismatch { cell, expected } => {
                write!(f, "clue cell {} is not {:?}", cell, expected)
            }
            RuleViolation::RelationViolated { relation } => {
                write!(
                    f,
                    "{} relation between {} and {} does not hold",
                    relation.kind, relation.a, relation.b
                )
            }
        }
    }
}

impl SolutionValidator {
    /// Create a validator for one puzzle model
    pub fn new(model: PuzzleModel) -> Self {
        Self { model }
    }

    /// Check a solved grid against every rule of the puzzle
    pub fn validate(&self, grid: &SolvedGrid) -> ValidationResult {
        let mut violations = Vec::new();

        if grid.size() != self.model.size() {
            violations.push(RuleViolation::SizeMismatch {
                expected: self.model.size(),
                actual: grid.size(),
            });
            return ValidationResult {
                is_valid: false,
                violations,
            };
        }

        self.check_balance(grid, &mut violations);
        self.check_runs(grid, &mut violations);
        self.check_uniqueness(grid, &mut violations);
        self.check_clues(grid, &mut violations);
        self.check_relations(grid, &mut violations);

        ValidationResult {
            is_valid: violations.is_empty(),
            violations,
        }
    }

    fn check_balance(&self, grid: &SolvedGrid, violations: &mut Vec<RuleViolation>) {
        let half = grid.size() / 2;

        for row in 0..grid.size() {
            let white_count = grid.white_count_in_row(row);
            if white_count != half {
                violations.push(RuleViolation::UnbalancedRow { row, white_count });
            }
        }
        for col in 0..grid.size() {
            let white_count = grid.white_count_in_col(col);
            if white_count != half {
                violations.push(RuleViolation::UnbalancedColumn { col, white_count });
            }
        }
    }

    fn check_runs(&self, grid: &SolvedGrid, violations: &mut Vec<RuleViolation>) {
        let size = grid.size();
        if size < 3 {
            return;
        }

        for row in 0..size {
            for col in 0..size - 2 {
                let color = grid.get(row, col);
                if grid.get(row, col + 1) == color && grid.get(row, col + 2) == color {
                    violations.push(RuleViolation::HorizontalRun { row, col });
                }
            }
        }
        for col in 0..size {
            for row in 0..size - 2 {
                let color = grid.get(row, col);
                if grid.get(row + 1, col) == color && grid.get(row + 2, col) == color {
                    violations.push(RuleViolation::VerticalRun { row, col });
                }
            }
        }
    }

    fn check_uniqueness(&self, grid: &SolvedGrid, violations: &mut Vec<RuleViolation>) {
        for (first, second) in (0..grid.size()).tuple_combinations() {
            if grid.row(first) == grid.row(second) {
                violations.push(RuleViolation::DuplicateRows { first, second });
            }
        }
        for (first, second) in (0..grid.size()).tuple_combinations() {
            if grid.col(first) == grid.col(second) {
                violations.push(RuleViolation::DuplicateColumns { first, second });
            }
        }
    }

    fn check_clues(&self, grid: &SolvedGrid, violations: &mut Vec<RuleViolation>) {
        for (&cell, expected) in self
            .model
            .white_clues()
            .iter()
            .map(|cell| (cell, CellColor::White))
            .chain(
                self.model
                    .black_clues()
                    .iter()
                    .map(|cell| (cell, CellColor::Black)),
            )
        {
            if grid.get(cell.row, cell.col) != expected {
                violations.push(RuleViolation::ClueMismatch { cell, expected });
            }
        }
    }

    fn check_relations(&self, grid: &SolvedGrid, violations: &mut Vec<RuleViolation>) {
        use crate::puzzle::RelationKind;

        for &relation in self.model.relations() {
            let a = grid.get(relation.a.row, relation.a.col);
            let b = grid.get(relation.b.row, relation.b.col);
            let holds = match relation.kind {
                RelationKind::Equal => a == b,
                RelationKind::Different => a != b,
            };
            if !holds {
                violations.push(RuleViolation::RelationViolated { relation });
            }
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Validation Result: {}",
            if self.is_valid { "VALID" } else { "INVALID" }
        )?;
        for violation in &self.violations {
            writeln!(f, "  - {}", violation)?;
        }
        Ok(())
    }
}
