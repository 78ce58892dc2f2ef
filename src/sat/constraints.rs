//! Constraint generation for the mosaic puzzle SAT encoding
//!
//! Each puzzle rule is emitted as its own clause group: clue fixing, no
//! run of three, balanced line counts, pairwise line uniqueness, and the
//! equal/different cell relations. The groups are independent and their
//! conjunction is the full puzzle.

use super::VariableManager;
use crate::error::SolveError;
use crate::puzzle::{PuzzleModel, RelationKind};
use itertools::Itertools;

/// Represents a SAT clause (disjunction of literals)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>, // Positive for variable, negative for negation
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal)
    pub fn unit(literal: i32) -> Self {
        Self {
            literals: vec![literal],
        }
    }

    /// Create a binary clause (two literals)
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self {
            literals: vec![lit1, lit2],
        }
    }

    /// Check if clause is empty (unsatisfiable)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if clause is unit
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }
}

/// Generates the CNF constraint set for a frozen puzzle model
pub struct ConstraintGenerator {
    variable_manager: VariableManager,
    size: usize,
}

impl ConstraintGenerator {
    /// Create a generator for a size x size grid
    pub fn new(size: usize) -> Self {
        Self {
            variable_manager: VariableManager::new(size),
            size,
        }
    }

    /// Generate every clause group for the given puzzle model.
    ///
    /// Emission is deterministic: the same model always produces the same
    /// clause list in the same order.
    pub fn generate_all_constraints(
        &mut self,
        model: &PuzzleModel,
    ) -> Result<Vec<Clause>, SolveError> {
        if model.size() != self.size {
            return Err(SolveError::Internal(format!(
                "model size {} does not match generator size {}",
                model.size(),
                self.size
            )));
        }

        let mut clauses = Vec::new();
        clauses.extend(self.generate_clue_constraints(model)?);
        clauses.extend(self.generate_run_constraints()?);
        clauses.extend(self.generate_balance_constraints()?);
        clauses.extend(self.generate_uniqueness_constraints()?);
        clauses.extend(self.generate_relation_constraints(model)?);
        Ok(clauses)
    }

    /// Unit clauses pinning each clue cell to its given color
    fn generate_clue_constraints(&self, model: &PuzzleModel) -> Result<Vec<Clause>, SolveError> {
        let mut clauses = Vec::new();

        for cell in model.white_clues() {
            let var = self.variable_manager.cell_variable(cell.row, cell.col)?;
            clauses.push(Clause::unit(var));
        }
        for cell in model.black_clues() {
            let var = self.variable_manager.cell_variable(cell.row, cell.col)?;
            clauses.push(Clause::unit(-var));
        }

        Ok(clauses)
    }

    /// Forbid three consecutive same-colored cells in any row or column.
    ///
    /// Every window of three cells inside the grid gets two clauses: not all
    /// white and not all black. Grids smaller than 3 have no windows and
    /// emit nothing.
    fn generate_run_constraints(&self) -> Result<Vec<Clause>, SolveError> {
        let mut clauses = Vec::new();
        if self.size < 3 {
            return Ok(clauses);
        }

        for row in 0..self.size {
            for col in 0..self.size - 2 {
                let a = self.variable_manager.cell_variable(row, col)?;
                let b = self.variable_manager.cell_variable(row, col + 1)?;
                let c = self.variable_manager.cell_variable(row, col + 2)?;
                clauses.push(Clause::new(vec![-a, -b, -c]));
                clauses.push(Clause::new(vec![a, b, c]));
            }
        }

        for col in 0..self.size {
            for row in 0..self.size - 2 {
                let a = self.variable_manager.cell_variable(row, col)?;
                let b = self.variable_manager.cell_variable(row + 1, col)?;
                let c = self.variable_manager.cell_variable(row + 2, col)?;
                clauses.push(Clause::new(vec![-a, -b, -c]));
                clauses.push(Clause::new(vec![a, b, c]));
            }
        }

        Ok(clauses)
    }

    /// Every row and column holds exactly size/2 white cells
    fn generate_balance_constraints(&mut self) -> Result<Vec<Clause>, SolveError> {
        let mut clauses = Vec::new();

        for row in 0..self.size {
            let vars = self.variable_manager.row_variables(row)?;
            clauses.extend(self.encode_balanced_line(&vars));
        }
        for col in 0..self.size {
            let vars = self.variable_manager.col_variables(col)?;
            clauses.extend(self.encode_balanced_line(&vars));
        }

        Ok(clauses)
    }

    /// Exactly half of the literals true: at-most-half over the literals and
    /// at-most-half over their negations.
    fn encode_balanced_line(&mut self, literals: &[i32]) -> Vec<Clause> {
        let bound = literals.len() / 2;
        let mut clauses = self.encode_at_most(literals, bound);
        let negated: Vec<i32> = literals.iter().map(|&lit| -lit).collect();
        clauses.extend(self.encode_at_most(&negated, bound));
        clauses
    }

    /// Sequential-counter encoding of "at most `bound` of `literals` hold".
    ///
    /// `registers[j]` means at least j+1 of the literals seen so far are
    /// true; a literal that would push the count past `bound` is forbidden.
    /// Requires 1 <= bound < literals.len().
    fn encode_at_most(&mut self, literals: &[i32], bound: usize) -> Vec<Clause> {
        let n = literals.len();
        let mut clauses = Vec::new();

        let mut prev: Vec<i32> = (0..bound)
            .map(|_| self.variable_manager.fresh_variable())
            .collect();
        clauses.push(Clause::binary(-literals[0], prev[0]));
        for &register in &prev[1..] {
            clauses.push(Clause::unit(-register));
        }

        for i in 1..n - 1 {
            let registers: Vec<i32> = (0..bound)
                .map(|_| self.variable_manager.fresh_variable())
                .collect();
            clauses.push(Clause::binary(-literals[i], registers[0]));
            clauses.push(Clause::binary(-prev[0], registers[0]));
            for j in 1..bound {
                clauses.push(Clause::new(vec![-literals[i], -prev[j - 1], registers[j]]));
                clauses.push(Clause::binary(-prev[j], registers[j]));
            }
            clauses.push(Clause::binary(-literals[i], -prev[bound - 1]));
            prev = registers;
        }

        clauses.push(Clause::binary(-literals[n - 1], -prev[bound - 1]));
        clauses
    }

    /// All rows pairwise distinct, all columns pairwise distinct.
    ///
    /// The dominant clause group: O(size^2) line pairs with O(size) clauses
    /// each, iterated index-based over the pairs.
    fn generate_uniqueness_constraints(&mut self) -> Result<Vec<Clause>, SolveError> {
        let mut clauses = Vec::new();

        for (a, b) in (0..self.size).tuple_combinations() {
            let line_a = self.variable_manager.row_variables(a)?;
            let line_b = self.variable_manager.row_variables(b)?;
            clauses.extend(self.encode_lines_differ(&line_a, &line_b));
        }
        for (a, b) in (0..self.size).tuple_combinations() {
            let line_a = self.variable_manager.col_variables(a)?;
            let line_b = self.variable_manager.col_variables(b)?;
            clauses.extend(self.encode_lines_differ(&line_a, &line_b));
        }

        Ok(clauses)
    }

    /// At least one position where two lines disagree: a selector per
    /// position implying disagreement there, plus one disjunction over the
    /// selectors.
    fn encode_lines_differ(&mut self, line_a: &[i32], line_b: &[i32]) -> Vec<Clause> {
        let mut clauses = Vec::with_capacity(2 * line_a.len() + 1);
        let mut selectors = Vec::with_capacity(line_a.len());

        for (&x, &y) in line_a.iter().zip(line_b) {
            let selector = self.variable_manager.fresh_variable();
            clauses.push(Clause::new(vec![-selector, x, y]));
            clauses.push(Clause::new(vec![-selector, -x, -y]));
            selectors.push(selector);
        }
        clauses.push(Clause::new(selectors));

        clauses
    }

    /// Equality and difference constraints between related cell pairs
    fn generate_relation_constraints(
        &self,
        model: &PuzzleModel,
    ) -> Result<Vec<Clause>, SolveError> {
        let mut clauses = Vec::new();

        for relation in model.relations() {
            let a = self
                .variable_manager
                .cell_variable(relation.a.row, relation.a.col)?;
            let b = self
                .variable_manager
                .cell_variable(relation.b.row, relation.b.col)?;

            match relation.kind {
                RelationKind::Equal => {
                    clauses.push(Clause::binary(-a, b));
                    clauses.push(Clause::binary(a, -b));
                }
                RelationKind::Different => {
                    clauses.push(Clause::binary(a, b));
                    clauses.push(Clause::binary(-a, -b));
                }
            }
        }

        Ok(clauses)
    }

    /// Get the variable manager (for decoding and statistics)
    pub fn variable_manager(&self) -> &VariableManager {
        &self.variable_manager
    }

    /// Get constraint generation statistics
    pub fn statistics(&self) -> ConstraintStatistics {
        ConstraintStatistics {
            size: self.size,
            total_variables: self.variable_manager.variable_count(),
        }
    }
}

/// Statistics about constraint generation
#[derive(Debug, Clone)]
pub struct ConstraintStatistics {
    pub size: usize,
    pub total_variables: usize,
}

impl std::fmt::Display for ConstraintStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Constraint Generation Statistics:")?;
        writeln!(f, "  Grid size: {}x{}", self.size, self.size)?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        Ok(())
    }
}
