//! Puzzle model, solved-grid types, and file loading

pub mod grid;
pub mod io;
pub mod model;

pub use grid::{CellColor, SolvedGrid};
pub use io::{create_example_puzzles, load_puzzle_from_file, parse_puzzle_from_string};
pub use model::{Cell, PuzzleModel, Relation, RelationKind};
