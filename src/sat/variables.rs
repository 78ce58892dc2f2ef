//! Variable management for the SAT encoding

use crate::error::SolveError;
use std::collections::HashMap;

/// Variables with a persistent identity in the encoding
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariableType {
    /// The color of a cell: `true` = white, `false` = black
    Cell { row: usize, col: usize },
}

/// Maps puzzle variables to SAT variable ids and hands out anonymous
/// auxiliary ids for the cardinality and uniqueness encodings.
///
/// Cell variables are registered up front in row-major order, so the cell at
/// (row, col) always gets id `row * size + col + 1`; auxiliaries follow.
#[derive(Debug)]
pub struct VariableManager {
    variable_map: HashMap<VariableType, i32>,
    next_id: i32,
    size: usize,
}

impl VariableManager {
    /// Create a manager for a size x size grid
    pub fn new(size: usize) -> Self {
        let mut variable_map = HashMap::new();
        let mut next_id = 1; // SAT variables start from 1
        for row in 0..size {
            for col in 0..size {
                variable_map.insert(VariableType::Cell { row, col }, next_id);
                next_id += 1;
            }
        }

        Self {
            variable_map,
            next_id,
            size,
        }
    }

    /// Variable id for the cell at the given coordinates
    pub fn cell_variable(&self, row: usize, col: usize) -> Result<i32, SolveError> {
        if row >= self.size || col >= self.size {
            return Err(SolveError::Internal(format!(
                "cell ({}, {}) out of bounds for size {}",
                row, col, self.size
            )));
        }
        self.variable_map
            .get(&VariableType::Cell { row, col })
            .copied()
            .ok_or_else(|| {
                SolveError::Internal(format!("cell ({}, {}) has no variable", row, col))
            })
    }

    /// All cell variables of one row, in column order
    pub fn row_variables(&self, row: usize) -> Result<Vec<i32>, SolveError> {
        (0..self.size)
            .map(|col| self.cell_variable(row, col))
            .collect()
    }

    /// All cell variables of one column, in row order
    pub fn col_variables(&self, col: usize) -> Result<Vec<i32>, SolveError> {
        (0..self.size)
            .map(|row| self.cell_variable(row, col))
            .collect()
    }

    /// Allocate a fresh auxiliary variable
    pub fn fresh_variable(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Total number of variables allocated so far
    pub fn variable_count(&self) -> usize {
        (self.next_id - 1) as usize
    }

    /// Grid size this manager was built for
    pub fn size(&self) -> usize {
        self.size
    }

    /// Statistics about variable usage
    pub fn statistics(&self) -> VariableStatistics {
        let cell_variables = self.size * self.size;
        VariableStatistics {
            total_variables: self.variable_count(),
            cell_variables,
            auxiliary_variables: self.variable_count() - cell_variables,
        }
    }
}

/// Statistics about variable usage
#[derive(Debug, Clone)]
pub struct VariableStatistics {
    pub total_variables: usize,
    pub cell_variables: usize,
    pub auxiliary_variables: usize,
}

impl std::fmt::Display for VariableStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Variable Statistics:")?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        writeln!(f, "  Cell variables: {}", self.cell_variables)?;
        writeln!(f, "  Auxiliary variables: {}", self.auxiliary_variables)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_ids() {
        let vm = VariableManager::new(4);

        assert_eq!(vm.cell_variable(0, 0).unwrap(), 1);
        assert_eq!(vm.cell_variable(0, 3).unwrap(), 4);
        assert_eq!(vm.cell_variable(1, 0).unwrap(), 5);
        assert_eq!(vm.cell_variable(3, 3).unwrap(), 16);
        assert_eq!(vm.variable_count(), 16);
    }

    #[test]
    fn test_variable_bounds() {
        let vm = VariableManager::new(2);

        assert!(vm.cell_variable(1, 1).is_ok());
        assert!(vm.cell_variable(2, 0).is_err());
        assert!(vm.cell_variable(0, 2).is_err());
    }

    #[test]
    fn test_line_variables() {
        let vm = VariableManager::new(2);

        assert_eq!(vm.row_variables(0).unwrap(), vec![1, 2]);
        assert_eq!(vm.row_variables(1).unwrap(), vec![3, 4]);
        assert_eq!(vm.col_variables(0).unwrap(), vec![1, 3]);
        assert_eq!(vm.col_variables(1).unwrap(), vec![2, 4]);
    }

    #[test]
    fn test_fresh_variables_follow_cells() {
        let mut vm = VariableManager::new(2);

        assert_eq!(vm.fresh_variable(), 5);
        assert_eq!(vm.fresh_variable(), 6);
        assert_eq!(vm.variable_count(), 6);
    }

    #[test]
    fn test_statistics() {
        let mut vm = VariableManager::new(2);
        vm.fresh_variable();

        let stats = vm.statistics();
        assert_eq!(stats.total_variables, 5);
        assert_eq!(stats.cell_variables, 4);
        assert_eq!(stats.auxiliary_variables, 1);
    }
}
