//! Puzzle representation and load-time validation

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A cell coordinate. Identity only; rows and columns are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Kind of a pairwise relation between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Equal,
    Different,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::Equal => write!(f, "equal"),
            RelationKind::Different => write!(f, "different"),
        }
    }
}

/// A same/different constraint linking two arbitrary cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub kind: RelationKind,
    pub a: Cell,
    pub b: Cell,
}

/// Validated, frozen description of a mosaic puzzle: grid size, pre-colored
/// cells, and pairwise relations. Constructed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleModel {
    size: usize,
    white_clues: Vec<Cell>,
    black_clues: Vec<Cell>,
    relations: Vec<Relation>,
}

impl PuzzleModel {
    /// Build and validate a puzzle model.
    ///
    /// Rejects odd or zero sizes, out-of-range coordinates, cells clued as
    /// both colors, and relations linking a cell to itself. All of these are
    /// configuration errors, surfaced before any constraint is built.
    pub fn new(
        size: usize,
        white_clues: Vec<Cell>,
        black_clues: Vec<Cell>,
        equal_relations: Vec<(Cell, Cell)>,
        different_relations: Vec<(Cell, Cell)>,
    ) -> Result<Self, ConfigError> {
        if size == 0 || size % 2 != 0 {
            return Err(ConfigError::InvalidSize(size));
        }

        let check_bounds = |cell: Cell| {
            if cell.row >= size || cell.col >= size {
                Err(ConfigError::OutOfBounds {
                    row: cell.row,
                    col: cell.col,
                    size,
                })
            } else {
                Ok(())
            }
        };

        for &cell in white_clues.iter().chain(black_clues.iter()) {
            check_bounds(cell)?;
        }

        let white_set: HashSet<Cell> = white_clues.iter().copied().collect();
        for &cell in &black_clues {
            if white_set.contains(&cell) {
                return Err(ConfigError::ConflictingClues {
                    row: cell.row,
                    col: cell.col,
                });
            }
        }

        let mut relations = Vec::with_capacity(equal_relations.len() + different_relations.len());
        let tagged = equal_relations
            .into_iter()
            .map(|(a, b)| (RelationKind::Equal, a, b))
            .chain(
                different_relations
                    .into_iter()
                    .map(|(a, b)| (RelationKind::Different, a, b)),
            );
        for (kind, a, b) in tagged {
            check_bounds(a)?;
            check_bounds(b)?;
            if a == b {
                return Err(ConfigError::SelfRelation {
                    kind,
                    row: a.row,
                    col: a.col,
                });
            }
            relations.push(Relation { kind, a, b });
        }

        Ok(Self {
            size,
            white_clues,
            black_clues,
            relations,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn white_clues(&self) -> &[Cell] {
        &self.white_clues
    }

    pub fn black_clues(&self) -> &[Cell] {
        &self.black_clues
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_model() {
        let model = PuzzleModel::new(
            4,
            vec![Cell::new(0, 0)],
            vec![Cell::new(0, 1)],
            vec![(Cell::new(1, 0), Cell::new(2, 1))],
            vec![(Cell::new(1, 1), Cell::new(2, 0))],
        )
        .unwrap();

        assert_eq!(model.size(), 4);
        assert_eq!(model.white_clues(), &[Cell::new(0, 0)]);
        assert_eq!(model.black_clues(), &[Cell::new(0, 1)]);
        assert_eq!(model.relations().len(), 2);
        assert_eq!(model.relations()[0].kind, RelationKind::Equal);
        assert_eq!(model.relations()[1].kind, RelationKind::Different);
    }

    #[test]
    fn test_odd_size_rejected() {
        let result = PuzzleModel::new(5, vec![], vec![], vec![], vec![]);
        assert!(matches!(result, Err(ConfigError::InvalidSize(5))));
    }

    #[test]
    fn test_zero_size_rejected() {
        let result = PuzzleModel::new(0, vec![], vec![], vec![], vec![]);
        assert!(matches!(result, Err(ConfigError::InvalidSize(0))));
    }

    #[test]
    fn test_out_of_bounds_clue_rejected() {
        let result = PuzzleModel::new(4, vec![Cell::new(4, 0)], vec![], vec![], vec![]);
        assert!(matches!(
            result,
            Err(ConfigError::OutOfBounds { row: 4, col: 0, size: 4 })
        ));
    }

    #[test]
    fn test_conflicting_clues_rejected() {
        let result = PuzzleModel::new(
            4,
            vec![Cell::new(1, 2)],
            vec![Cell::new(1, 2)],
            vec![],
            vec![],
        );
        assert!(matches!(
            result,
            Err(ConfigError::ConflictingClues { row: 1, col: 2 })
        ));
    }

    #[test]
    fn test_self_relation_rejected() {
        let result = PuzzleModel::new(
            4,
            vec![],
            vec![],
            vec![(Cell::new(2, 2), Cell::new(2, 2))],
            vec![],
        );
        assert!(matches!(
            result,
            Err(ConfigError::SelfRelation {
                kind: RelationKind::Equal,
                row: 2,
                col: 2
            })
        ));
    }

    #[test]
    fn test_out_of_bounds_relation_rejected() {
        let result = PuzzleModel::new(
            4,
            vec![],
            vec![],
            vec![],
            vec![(Cell::new(0, 0), Cell::new(0, 4))],
        );
        assert!(matches!(result, Err(ConfigError::OutOfBounds { .. })));
    }

    #[test]
    fn test_contradictory_relations_are_not_a_config_error() {
        // Equal and Different over the same distinct pair is a well-formed
        // puzzle; it only becomes unsatisfiable at solve time.
        let result = PuzzleModel::new(
            4,
            vec![],
            vec![],
            vec![(Cell::new(0, 0), Cell::new(1, 1))],
            vec![(Cell::new(0, 0), Cell::new(1, 1))],
        );
        assert!(result.is_ok());
    }
}
