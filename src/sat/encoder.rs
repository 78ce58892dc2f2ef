//! Encode, solve, decode
//!
//! `SatEncoder` owns the whole SAT round trip: it turns a frozen puzzle
//! model into clauses, hands them to the configured oracle, and maps the
//! satisfying assignment back onto a colored grid.

use super::constraints::ConstraintGenerator;
use super::solver::{Assignment, SolverOptions, SolverOutcome};
use super::solver_factory::UnifiedSatSolver;
use crate::config::Settings;
use crate::error::SolveError;
use crate::puzzle::{CellColor, PuzzleModel, SolvedGrid};
use std::time::Duration;

pub struct SatEncoder {
    constraint_generator: ConstraintGenerator,
    solver: UnifiedSatSolver,
    size: usize,
}

impl SatEncoder {
    /// Create an encoder for the given settings and puzzle model
    pub fn new(settings: &Settings, model: &PuzzleModel) -> Self {
        let constraint_generator = ConstraintGenerator::new(model.size());

        let mut solver = UnifiedSatSolver::new(settings.solver.backend);
        solver.configure(&SolverOptions {
            timeout: Some(Duration::from_secs(settings.solver.timeout_seconds)),
        });

        Self {
            constraint_generator,
            solver,
            size: model.size(),
        }
    }

    /// Encode the model, run the oracle, and decode the result
    pub fn solve(&mut self, model: &PuzzleModel) -> Result<SolvedGrid, SolveError> {
        let clauses = self.constraint_generator.generate_all_constraints(model)?;
        self.solver.add_clauses(&clauses)?;

        match self.solver.solve()? {
            SolverOutcome::Satisfiable(assignment) => {
                self.extract_grid_from_assignment(&assignment)
            }
            SolverOutcome::Unsatisfiable => Err(SolveError::Unsatisfiable),
        }
    }

    /// Map a satisfying assignment back onto the grid.
    ///
    /// Fails only when the assignment is missing a cell variable, which is a
    /// contract breach by the oracle rather than a property of the puzzle.
    fn extract_grid_from_assignment(
        &self,
        assignment: &Assignment,
    ) -> Result<SolvedGrid, SolveError> {
        let mut cells = Vec::with_capacity(self.size * self.size);

        for row in 0..self.size {
            for col in 0..self.size {
                let var = self
                    .constraint_generator
                    .variable_manager()
                    .cell_variable(row, col)?;

                let value = assignment.get(&var).copied().ok_or_else(|| {
                    SolveError::Internal(format!(
                        "assignment is missing variable {} for cell ({}, {})",
                        var, row, col
                    ))
                })?;

                cells.push(if value { CellColor::White } else { CellColor::Black });
            }
        }

        SolvedGrid::from_cells(self.size, cells).map_err(SolveError::Internal)
    }

    /// Get encoding statistics
    pub fn statistics(&self) -> EncodingStatistics {
        EncodingStatistics {
            size: self.size,
            total_variables: self.solver.variable_count(),
            total_clauses: self.solver.clause_count(),
        }
    }
}

/// Statistics about the SAT encoding
#[derive(Debug, Clone)]
pub struct EncodingStatistics {
    pub size: usize,
    pub total_variables: usize,
    pub total_clauses: usize,
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SAT Encoding Statistics:")?;
        writeln!(f, "  Grid: {}x{}", self.size, self.size)?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        writeln!(f, "  Total clauses: {}", self.total_clauses)?;
        Ok(())
    }
}
