//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::puzzle::{PuzzleModel, Relation, RelationKind, SolvedGrid};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Formats puzzles and solved grids for console and file output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a solved grid, one row per line, `X` white and `O` black
    pub fn format_grid(grid: &SolvedGrid) -> String {
        grid.to_string()
    }

    /// Format a grid with row and column numbers
    pub fn format_grid_with_coords(grid: &SolvedGrid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..grid.size() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.size() {
            output.push_str(&format!("{:2} ", row));
            for col in 0..grid.size() {
                output.push(' ');
                output.push(grid.get(row, col).marker());
            }
            output.push('\n');
        }

        output
    }

    /// Summarize the puzzle input: clues and relations
    pub fn format_puzzle_summary(model: &PuzzleModel) -> String {
        let mut output = String::new();

        output.push_str("White clues: ");
        for cell in model.white_clues() {
            output.push_str(&format!("({}/{}) ", cell.row, cell.col));
        }
        output.push('\n');

        output.push_str("Black clues: ");
        for cell in model.black_clues() {
            output.push_str(&format!("({}/{}) ", cell.row, cell.col));
        }
        output.push('\n');

        let (equals, differents): (Vec<&Relation>, Vec<&Relation>) = model
            .relations()
            .iter()
            .partition(|relation| relation.kind == RelationKind::Equal);

        if !equals.is_empty() {
            output.push_str("(=) connections: ");
            for relation in equals {
                output.push_str(&format!(
                    "({}/{})=({}/{}) ",
                    relation.a.row, relation.a.col, relation.b.row, relation.b.col
                ));
            }
            output.push('\n');
        }
        if !differents.is_empty() {
            output.push_str("(x) connections: ");
            for relation in differents {
                output.push_str(&format!(
                    "({}/{})x({}/{}) ",
                    relation.a.row, relation.a.col, relation.b.row, relation.b.col
                ));
            }
            output.push('\n');
        }

        output
    }

    /// Save a solved grid into a directory, returning the written path
    pub fn save_solution<P: AsRef<Path>>(
        grid: &SolvedGrid,
        output_dir: P,
        format: OutputFormat,
    ) -> Result<PathBuf> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory {}", output_dir.display()))?;

        let path = match format {
            OutputFormat::Text => {
                let path = output_dir.join("solution.txt");
                std::fs::write(&path, Self::format_grid(grid))?;
                path
            }
            OutputFormat::Json => {
                let path = output_dir.join("solution.json");
                let json = serde_json::to_string_pretty(grid)
                    .context("Failed to serialize solution")?;
                std::fs::write(&path, json)?;
                path
            }
        };

        Ok(path)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
