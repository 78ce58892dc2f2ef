//! Factory for creating SAT oracle instances based on configuration

use super::backtracking::BacktrackingSolver;
use super::constraints::Clause;
use super::solver::{CadicalSolver, SolverOptions, SolverOutcome};
use crate::config::SolverBackend;
use crate::error::SolveError;

/// Unified oracle interface over the available backends
pub enum UnifiedSatSolver {
    Cadical(CadicalSolver),
    Backtracking(BacktrackingSolver),
}

impl UnifiedSatSolver {
    /// Create a new solver instance for the specified backend
    pub fn new(backend: SolverBackend) -> Self {
        match backend {
            SolverBackend::Cadical => UnifiedSatSolver::Cadical(CadicalSolver::new()),
            SolverBackend::Backtracking => {
                UnifiedSatSolver::Backtracking(BacktrackingSolver::new())
            }
        }
    }

    /// Add clauses to the solver
    pub fn add_clauses(&mut self, clauses: &[Clause]) -> Result<(), SolveError> {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.add_clauses(clauses),
            UnifiedSatSolver::Backtracking(solver) => solver.add_clauses(clauses),
        }
    }

    /// Run the solver to completion
    pub fn solve(&mut self) -> Result<SolverOutcome, SolveError> {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.solve(),
            UnifiedSatSolver::Backtracking(solver) => solver.solve(),
        }
    }

    /// Set solver configuration options
    pub fn configure(&mut self, options: &SolverOptions) {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.configure(options),
            UnifiedSatSolver::Backtracking(solver) => solver.configure(options),
        }
    }

    /// Get the number of variables
    pub fn variable_count(&self) -> usize {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.variable_count(),
            UnifiedSatSolver::Backtracking(solver) => solver.variable_count(),
        }
    }

    /// Get the number of clauses
    pub fn clause_count(&self) -> usize {
        match self {
            UnifiedSatSolver::Cadical(solver) => solver.clause_count(),
            UnifiedSatSolver::Backtracking(solver) => solver.clause_count(),
        }
    }

    /// Get the backend type being used
    pub fn backend(&self) -> SolverBackend {
        match self {
            UnifiedSatSolver::Cadical(_) => SolverBackend::Cadical,
            UnifiedSatSolver::Backtracking(_) => SolverBackend::Backtracking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selection() {
        let cadical = UnifiedSatSolver::new(SolverBackend::Cadical);
        assert_eq!(cadical.backend(), SolverBackend::Cadical);

        let backtracking = UnifiedSatSolver::new(SolverBackend::Backtracking);
        assert_eq!(backtracking.backend(), SolverBackend::Backtracking);
    }

    #[test]
    fn test_both_backends_agree_on_satisfiable() {
        for backend in [SolverBackend::Cadical, SolverBackend::Backtracking] {
            let mut solver = UnifiedSatSolver::new(backend);
            solver.add_clauses(&[Clause::new(vec![1, 2])]).unwrap();
            assert!(matches!(
                solver.solve().unwrap(),
                SolverOutcome::Satisfiable(_)
            ));
        }
    }

    #[test]
    fn test_both_backends_agree_on_unsatisfiable() {
        for backend in [SolverBackend::Cadical, SolverBackend::Backtracking] {
            let mut solver = UnifiedSatSolver::new(backend);
            solver
                .add_clauses(&[Clause::unit(1), Clause::unit(-1)])
                .unwrap();
            assert!(matches!(
                solver.solve().unwrap(),
                SolverOutcome::Unsatisfiable
            ));
        }
    }
}
