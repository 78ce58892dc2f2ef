//! Puzzle file loading
//!
//! Wire format, one record per line:
//! - line 1: grid size N (first comma-separated field)
//! - line 2: comma-separated "row col" pairs, the white clues
//! - line 3: comma-separated "row col" pairs, the black clues
//! - line 4 (optional): "r1 c1 r2 c2" quadruples, equal relations
//! - line 5 (optional): "r1 c1 r2 c2" quadruples, different relations
//!
//! Absent optional lines mean no relations of that kind. A blank line means
//! an empty record.

use super::model::{Cell, PuzzleModel};
use crate::error::ConfigError;
use std::path::Path;

/// Load a puzzle from a file
pub fn load_puzzle_from_file<P: AsRef<Path>>(path: P) -> Result<PuzzleModel, ConfigError> {
    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    parse_puzzle_from_string(&content)
}

/// Parse a puzzle from its string representation
pub fn parse_puzzle_from_string(content: &str) -> Result<PuzzleModel, ConfigError> {
    let lines: Vec<&str> = content.lines().map(str::trim).collect();

    // Trailing blank lines are tolerated, but the first three records are
    // positional, so a blank second or third line still counts as an empty
    // clue record.
    let last_nonempty = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map(|idx| idx + 1)
        .unwrap_or(0);
    let keep = lines.len().min(3).max(last_nonempty);
    let lines = &lines[..keep];

    if lines.len() < 3 {
        return Err(ConfigError::Malformed {
            line: lines.len() + 1,
            reason: "expected at least three records: size, white clues, black clues".to_string(),
        });
    }
    if lines.len() > 5 {
        return Err(ConfigError::Malformed {
            line: 6,
            reason: format!("unexpected extra record (found {} lines)", lines.len()),
        });
    }

    let size = parse_size(lines[0]).map_err(|reason| ConfigError::Malformed { line: 1, reason })?;

    let white_clues = parse_cell_list(lines[1], 2)?;
    let black_clues = parse_cell_list(lines[2], 3)?;

    let equal_relations = if lines.len() > 3 {
        parse_pair_list(lines[3], 4)?
    } else {
        Vec::new()
    };
    let different_relations = if lines.len() > 4 {
        parse_pair_list(lines[4], 5)?
    } else {
        Vec::new()
    };

    PuzzleModel::new(
        size,
        white_clues,
        black_clues,
        equal_relations,
        different_relations,
    )
}

fn parse_size(line: &str) -> Result<usize, String> {
    let field = line.split(',').next().unwrap_or("").trim();
    field
        .parse::<usize>()
        .map_err(|_| format!("grid size is not an integer: '{}'", field))
}

fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
}

fn parse_cell_list(line: &str, line_number: usize) -> Result<Vec<Cell>, ConfigError> {
    fields(line)
        .map(|field| {
            parse_coordinates::<2>(field).map(|[row, col]| Cell::new(row, col))
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|reason| ConfigError::Malformed {
            line: line_number,
            reason,
        })
}

fn parse_pair_list(line: &str, line_number: usize) -> Result<Vec<(Cell, Cell)>, ConfigError> {
    fields(line)
        .map(|field| {
            parse_coordinates::<4>(field)
                .map(|[r1, c1, r2, c2]| (Cell::new(r1, c1), Cell::new(r2, c2)))
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|reason| ConfigError::Malformed {
            line: line_number,
            reason,
        })
}

fn parse_coordinates<const N: usize>(field: &str) -> Result<[usize; N], String> {
    let parts: Vec<&str> = field.split_whitespace().collect();
    if parts.len() != N {
        return Err(format!(
            "expected {} space-separated numbers, got '{}'",
            N, field
        ));
    }

    let mut values = [0usize; N];
    for (slot, part) in values.iter_mut().zip(parts) {
        *slot = part
            .parse::<usize>()
            .map_err(|_| format!("'{}' is not a coordinate in '{}'", part, field))?;
    }
    Ok(values)
}

/// Create example puzzle files for testing and first runs
pub fn create_example_puzzles<P: AsRef<Path>>(output_dir: P) -> Result<(), std::io::Error> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)?;

    // Clue-only puzzle: the whole first row is given.
    let simple = "4\n0 0,0 1\n0 2,0 3\n";
    std::fs::write(dir.join("simple.csv"), simple)?;

    // Same clues plus one equal and one different relation.
    let relations = "4\n0 0,0 1\n0 2,0 3\n1 0 2 1\n1 1 2 0\n";
    std::fs::write(dir.join("relations.csv"), relations)?;

    // Three whites forced in a row; provably unsolvable.
    let contradiction = "4\n0 0,0 1,0 2\n\n";
    std::fs::write(dir.join("contradiction.csv"), contradiction)?;

    Ok(())
}
