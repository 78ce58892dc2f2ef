//! Bundled reference oracle: backtracking search over the clause set
//!
//! A plain iterative DPLL: decide variables in ascending order (cell
//! variables come first, row-major), propagate unit clauses to fixpoint,
//! and undo via a trail on conflict. Adequate for small grids; larger ones
//! should use the CaDiCaL backend behind the same interface.

use super::constraints::Clause;
use super::solver::{Assignment, SolverOptions, SolverOutcome};
use crate::error::SolveError;
use std::time::{Duration, Instant};

pub struct BacktrackingSolver {
    clauses: Vec<Clause>,
    variable_count: usize,
    timeout: Option<Duration>,
}

/// One decision point: where the trail stood, which variable was decided,
/// and whether the second polarity has been tried yet.
struct Decision {
    trail_mark: usize,
    var: usize,
    flipped: bool,
}

enum Propagation {
    Fixpoint,
    Conflict,
}

impl BacktrackingSolver {
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
            variable_count: 0,
            timeout: None,
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

        self.clauses.push(clause.clone());
        Ok(())
    }

    /// Set solver configuration options
    pub fn configure(&mut self, options: &SolverOptions) {
        self.timeout = options.timeout;
    }

    /// Search for a satisfying assignment
    pub fn solve(&mut self) -> Result<SolverOutcome, SolveError> {
        let deadline = self.timeout.map(|limit| (Instant::now() + limit, limit));
        let n = self.variable_count;

        let mut assignment: Vec<Option<bool>> = vec![None; n + 1];
        let mut trail: Vec<usize> = Vec::new();
        let mut decisions: Vec<Decision> = Vec::new();

        loop {
            if let Some((at, limit)) = deadline {
                if Instant::now() >= at {
                    return Err(SolveError::Timeout { limit });
                }
            }

            match self.propagate(&mut assignment, &mut trail) {
                Propagation::Conflict => {
                    // Take back the most recent decision with an untried
                    // polarity; no such decision means the set is unsatisfiable.
                    loop {
                        let Some(mut decision) = decisions.pop() else {
                            return Ok(SolverOutcome::Unsatisfiable);
                        };
                        while trail.len() > decision.trail_mark {
                            let var = trail.pop().expect("trail shorter than its mark");
                            assignment[var] = None;
                        }
                        if !decision.flipped {
                            assignment[decision.var] = Some(false);
                            trail.push(decision.var);
                            decision.flipped = true;
                            decisions.push(decision);
                            break;
                        }
                    }
                }
                Propagation::Fixpoint => {
                    match (1..=n).find(|&var| assignment[var].is_none()) {
                        None => {
                            let full = (1..=n)
                                .map(|var| {
                                    (var as i32, assignment[var].expect("unassigned variable"))
                                })
                                .collect::<Assignment>();
                            return Ok(SolverOutcome::Satisfiable(full));
                        }
                        Some(var) => {
                            decisions.push(Decision {
                                trail_mark: trail.len(),
                                var,
                                flipped: false,
                            });
                            assignment[var] = Some(true);
                            trail.push(var);
                        }
                    }
                }
            }
        }
    }

    /// Assign every literal forced by a unit clause until nothing changes
    /// or a clause is falsified.
    fn propagate(&self, assignment: &mut [Option<bool>], trail: &mut Vec<usize>) -> Propagation {
        loop {
            let mut changed = false;

            for clause in &self.clauses {
                let mut satisfied = false;
                let mut unassigned: Option<i32> = None;
                let mut unassigned_count = 0;

                for &literal in &clause.literals {
                    match assignment[literal.unsigned_abs() as usize] {
                        Some(value) => {
                            if value == (literal > 0) {
                                satisfied = true;
                                break;
                            }
                        }
                        None => {
                            unassigned = Some(literal);
                            unassigned_count += 1;
                        }
                    }
                }

                if satisfied {
                    continue;
                }
                match unassigned_count {
                    0 => return Propagation::Conflict,
                    1 => {
                        let literal = unassigned.expect("unit literal lost");
                        let var = literal.unsigned_abs() as usize;
                        assignment[var] = Some(literal > 0);
                        trail.push(var);
                        changed = true;
                    }
                    _ => {}
                }
            }

            if !changed {
                return Propagation::Fixpoint;
            }
        }
    }

    /// Get the number of variables
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Get the number of clauses
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

impl Default for BacktrackingSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome_of(clauses: &[Clause]) -> SolverOutcome {
        let mut solver = BacktrackingSolver::new();
        solver.add_clauses(clauses).unwrap();
        solver.solve().unwrap()
    }

    #[test]
    fn test_simple_satisfiable() {
        let outcome = outcome_of(&[Clause::new(vec![1, 2]), Clause::new(vec![-1, 2])]);
        match outcome {
            SolverOutcome::Satisfiable(assignment) => {
                assert_eq!(assignment.get(&2), Some(&true));
            }
            SolverOutcome::Unsatisfiable => panic!("expected a solution"),
        }
    }

    #[test]
    fn test_unsatisfiable() {
        let outcome = outcome_of(&[Clause::unit(1), Clause::unit(-1)]);
        assert!(matches!(outcome, SolverOutcome::Unsatisfiable));
    }

    #[test]
    fn test_propagation_chain() {
        // Units force 1, then 2, then 3 without any decision.
        let outcome = outcome_of(&[
            Clause::unit(1),
            Clause::new(vec![-1, 2]),
            Clause::new(vec![-2, 3]),
        ]);
        match outcome {
            SolverOutcome::Satisfiable(assignment) => {
                assert_eq!(assignment.get(&1), Some(&true));
                assert_eq!(assignment.get(&2), Some(&true));
                assert_eq!(assignment.get(&3), Some(&true));
            }
            SolverOutcome::Unsatisfiable => panic!("expected a solution"),
        }
    }

    #[test]
    fn test_backtracking_finds_second_polarity() {
        // 1=true conflicts; the solver must flip to 1=false, 2=true.
        let outcome = outcome_of(&[
            Clause::new(vec![-1, 2]),
            Clause::new(vec![-1, -2]),
            Clause::new(vec![1, 2]),
        ]);
        match outcome {
            SolverOutcome::Satisfiable(assignment) => {
                assert_eq!(assignment.get(&1), Some(&false));
                assert_eq!(assignment.get(&2), Some(&true));
            }
            SolverOutcome::Unsatisfiable => panic!("expected a solution"),
        }
    }

    #[test]
    fn test_assignment_is_total() {
        let outcome = outcome_of(&[Clause::new(vec![1, 2, 3])]);
        match outcome {
            SolverOutcome::Satisfiable(assignment) => {
                assert_eq!(assignment.len(), 3);
            }
            SolverOutcome::Unsatisfiable => panic!("expected a solution"),
        }
    }

    #[test]
    fn test_zero_timeout_signals_timeout() {
        let mut solver = BacktrackingSolver::new();
        solver.add_clause(&Clause::new(vec![1, 2])).unwrap();
        solver.configure(&SolverOptions {
            timeout: Some(Duration::ZERO),
        });

        let result = solver.solve();
        assert!(matches!(result, Err(SolveError::Timeout { .. })));
    }

    #[test]
    fn test_empty_clause_rejected() {
        let mut solver = BacktrackingSolver::new();
        let result = solver.add_clause(&Clause::new(vec![]));
        assert!(matches!(result, Err(SolveError::Internal(_))));
    }
}
