//! Solved grid representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Final color of a solved cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellColor {
    White,
    Black,
}

impl CellColor {
    /// Single-character marker used by the console output and text files
    pub fn marker(self) -> char {
        match self {
            CellColor::White => 'X',
            CellColor::Black => 'O',
        }
    }
}

/// A fully colored grid, produced by decoding a satisfying assignment.
/// Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedGrid {
    size: usize,
    cells: Vec<CellColor>,
}

impl SolvedGrid {
    /// Create a grid from row-major cell colors
    pub fn from_cells(size: usize, cells: Vec<CellColor>) -> Result<Self, String> {
        if cells.len() != size * size {
            return Err(format!(
                "expected {} cells for a {}x{} grid, got {}",
                size * size,
                size,
                size,
                cells.len()
            ));
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Color at coordinates; panics on out-of-range input
    pub fn get(&self, row: usize, col: usize) -> CellColor {
        self.cells[self.index(row, col)]
    }

    /// Number of white cells in a row
    pub fn white_count_in_row(&self, row: usize) -> usize {
        (0..self.size)
            .filter(|&col| self.get(row, col) == CellColor::White)
            .count()
    }

    /// Number of white cells in a column
    pub fn white_count_in_col(&self, col: usize) -> usize {
        (0..self.size)
            .filter(|&row| self.get(row, col) == CellColor::White)
            .count()
    }

    /// A row as a color sequence
    pub fn row(&self, row: usize) -> Vec<CellColor> {
        (0..self.size).map(|col| self.get(row, col)).collect()
    }

    /// A column as a color sequence
    pub fn col(&self, col: usize) -> Vec<CellColor> {
        (0..self.size).map(|row| self.get(row, col)).collect()
    }
}

impl fmt::Display for SolvedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(row, col).marker())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellColor::{Black, White};

    #[test]
    fn test_grid_accessors() {
        let grid = SolvedGrid::from_cells(2, vec![White, Black, Black, White]).unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.get(0, 0), White);
        assert_eq!(grid.get(0, 1), Black);
        assert_eq!(grid.get(1, 0), Black);
        assert_eq!(grid.get(1, 1), White);
        assert_eq!(grid.white_count_in_row(0), 1);
        assert_eq!(grid.white_count_in_col(1), 1);
        assert_eq!(grid.row(0), vec![White, Black]);
        assert_eq!(grid.col(0), vec![White, Black]);
    }

    #[test]
    fn test_cell_count_mismatch() {
        assert!(SolvedGrid::from_cells(2, vec![White, Black]).is_err());
    }

    #[test]
    fn test_display_markers() {
        let grid = SolvedGrid::from_cells(2, vec![White, Black, Black, White]).unwrap();
        assert_eq!(grid.to_string(), "X O\nO X\n");
    }
}
