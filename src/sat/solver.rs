//! SAT oracle contract and the CaDiCaL backend

use super::constraints::Clause;
use crate::error::SolveError;
use cadical::Solver;
use std::collections::HashMap;
use std::time::Duration;

/// Total assignment of every emitted variable, produced on SAT
pub type Assignment = HashMap<i32, bool>;

/// Outcome of a solve call
#[derive(Debug, Clone)]
pub enum SolverOutcome {
    Satisfiable(Assignment),
    Unsatisfiable,
}

/// Configuration options for the SAT oracle
#[derive(Debug, Clone, Default)]
pub struct SolverOptions {
    /// Wall-clock budget; honored by the backtracking backend
    pub timeout: Option<Duration>,
}

/// SAT solver wrapper for CaDiCaL
pub struct CadicalSolver {
    solver: Solver,
    variable_count: usize,
    clause_count: usize,
}

impl CadicalSolver {
    /// Create a new CaDiCaL instance
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
            variable_count: 0,
            clause_count: 0,
        }
    }

    /// Add clauses to the solver
    pub fn add_clauses(&mut self, clauses: &[Clause]) -> Result<(), SolveError> {
        for clause in clauses {
            self.add_clause(clause)?;
        }
        Ok(())
    }

    /// Add a single clause to the solver
    pub fn add_clause(&mut self, clause: &Clause) -> Result<(), SolveError> {
        if clause.is_empty() {
            return Err(SolveError::Internal(
                "encoder handed the oracle an empty clause".to_string(),
            ));
        }

        for &literal in &clause.literals {
            let var = literal.unsigned_abs() as usize;
            if var > self.variable_count {
                self.variable_count = var;
            }
        }

        self.solver.add_clause(clause.literals.iter().copied());
        self.clause_count += 1;
        Ok(())
    }

    /// Run the solver to completion
    pub fn solve(&mut self) -> Result<SolverOutcome, SolveError> {
        match self.solver.solve() {
            Some(true) => Ok(SolverOutcome::Satisfiable(self.extract_assignment())),
            Some(false) => Ok(SolverOutcome::Unsatisfiable),
            // Without resource limits CaDiCaL always concludes; an unknown
            // answer here is a contract breach, not an unsatisfiable puzzle.
            None => Err(SolveError::Internal(
                "CaDiCaL returned an inconclusive result".to_string(),
            )),
        }
    }

    fn extract_assignment(&self) -> Assignment {
        let mut assignment = Assignment::new();
        for var in 1..=self.variable_count as i32 {
            if let Some(value) = self.solver.value(var) {
                assignment.insert(var, value);
            }
        }
        assignment
    }

    /// Set solver configuration options
    pub fn configure(&mut self, _options: &SolverOptions) {
        // CaDiCaL 0.1 exposes no timeout control; the budget is honored by
        // the backtracking backend instead.
    }

    /// Get the number of variables
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Get the number of clauses
    pub fn clause_count(&self) -> usize {
        self.clause_count
    }
}

impl Default for CadicalSolver {
    fn default() -> Self {
        Self::new()
    }
}
