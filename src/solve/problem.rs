//! The solve pipeline
//!
//! Stages run strictly forward: load → validate → encode → solve → decode,
//! ending in either a solved grid or a terminal unsatisfiability. The
//! decoded grid is re-checked against every rule before it is handed out.

use super::SolutionValidator;
use crate::config::Settings;
use crate::error::{PuzzleError, SolveError};
use crate::puzzle::{load_puzzle_from_file, PuzzleModel, SolvedGrid};
use crate::sat::encoder::EncodingStatistics;
use crate::sat::SatEncoder;

pub struct PuzzleProblem {
    settings: Settings,
    model: PuzzleModel,
    encoder: SatEncoder,
    validator: SolutionValidator,
}

impl PuzzleProblem {
    /// Create a problem by loading the puzzle file named in the settings.
    ///
    /// A malformed or self-contradictory puzzle surfaces here as a
    /// `ConfigError`, before any constraint is built.
    pub fn new(settings: Settings) -> Result<Self, PuzzleError> {
        let model = load_puzzle_from_file(&settings.input.puzzle_file)?;
        Ok(Self::with_model(settings, model))
    }

    /// Create a problem from an already-validated model (useful for testing)
    pub fn with_model(settings: Settings, model: PuzzleModel) -> Self {
        let encoder = SatEncoder::new(&settings, &model);
        let validator = SolutionValidator::new(model.clone());

        Self {
            settings,
            model,
            encoder,
            validator,
        }
    }

    /// Encode, solve, decode, and re-check the resulting grid
    pub fn solve(&mut self) -> Result<SolvedGrid, PuzzleError> {
        println!(
            "Solving {size}x{size} mosaic puzzle ({} white clues, {} black clues, {} relations)",
            self.model.white_clues().len(),
            self.model.black_clues().len(),
            self.model.relations().len(),
            size = self.model.size(),
        );

        let grid = self.encoder.solve(&self.model)?;

        // The oracle answered SAT; a grid that still breaks a rule means the
        // encoding and the decoder disagree, which is a defect on our side.
        let validation = self.validator.validate(&grid);
        if !validation.is_valid {
            let summary = validation
                .violations
                .iter()
                .map(|violation| violation.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SolveError::Internal(format!(
                "decoded grid violates puzzle rules: {}",
                summary
            ))
            .into());
        }

        Ok(grid)
    }

    /// Get the puzzle model
    pub fn model(&self) -> &PuzzleModel {
        &self.model
    }

    /// Get the problem settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get encoding statistics
    pub fn encoding_statistics(&self) -> EncodingStatistics {
        self.encoder.statistics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverBackend;
    use crate::error::ConfigError;
    use crate::puzzle::Cell;
    use tempfile::tempdir;

    fn test_settings(backend: SolverBackend) -> Settings {
        let mut settings = Settings::default();
        settings.solver.backend = backend;
        settings.solver.timeout_seconds = 30;
        settings
    }

    #[test]
    fn test_solve_with_clues() {
        let model = PuzzleModel::new(
            4,
            vec![Cell::new(0, 0)],
            vec![Cell::new(0, 1)],
            vec![],
            vec![],
        )
        .unwrap();
        let mut problem =
            PuzzleProblem::with_model(test_settings(SolverBackend::Backtracking), model.clone());

        let grid = problem.solve().unwrap();
        let validation = SolutionValidator::new(model).validate(&grid);
        assert!(validation.is_valid, "violations: {}", validation);
    }

    #[test]
    fn test_resolving_stays_valid() {
        // Re-solving the same model must keep producing rule-satisfying
        // grids, whether or not the exact coloring repeats.
        let model = PuzzleModel::new(4, vec![], vec![], vec![], vec![]).unwrap();
        let validator = SolutionValidator::new(model.clone());

        for _ in 0..2 {
            let mut problem = PuzzleProblem::with_model(
                test_settings(SolverBackend::Backtracking),
                model.clone(),
            );
            let grid = problem.solve().unwrap();
            assert!(validator.validate(&grid).is_valid);
        }
    }

    #[test]
    fn test_solve_with_relations() {
        let model = PuzzleModel::new(
            4,
            vec![Cell::new(0, 0), Cell::new(0, 1)],
            vec![Cell::new(0, 2), Cell::new(0, 3)],
            vec![(Cell::new(1, 0), Cell::new(2, 1))],
            vec![(Cell::new(1, 1), Cell::new(2, 0))],
        )
        .unwrap();
        let mut problem =
            PuzzleProblem::with_model(test_settings(SolverBackend::Backtracking), model.clone());

        let grid = problem.solve().unwrap();
        let validation = SolutionValidator::new(model).validate(&grid);
        assert!(validation.is_valid, "violations: {}", validation);
    }

    #[test]
    fn test_cadical_backend_agrees() {
        let model = PuzzleModel::new(
            4,
            vec![Cell::new(0, 0)],
            vec![Cell::new(0, 1)],
            vec![],
            vec![],
        )
        .unwrap();
        let mut problem =
            PuzzleProblem::with_model(test_settings(SolverBackend::Cadical), model.clone());

        let grid = problem.solve().unwrap();
        assert!(SolutionValidator::new(model).validate(&grid).is_valid);
    }

    #[test]
    fn test_contradictory_relations_are_unsatisfiable() {
        let model = PuzzleModel::new(
            4,
            vec![],
            vec![],
            vec![(Cell::new(0, 0), Cell::new(1, 1))],
            vec![(Cell::new(0, 0), Cell::new(1, 1))],
        )
        .unwrap();
        let mut problem =
            PuzzleProblem::with_model(test_settings(SolverBackend::Backtracking), model);

        let result = problem.solve();
        assert!(matches!(
            result,
            Err(PuzzleError::Solve(SolveError::Unsatisfiable))
        ));
    }

    #[test]
    fn test_fully_clued_grid_still_checked() {
        // Every cell is given; the solver only has consistency left to
        // confirm, and must return exactly the clued coloring.
        let pattern = [
            [true, true, false, false],
            [false, false, true, true],
            [true, false, true, false],
            [false, true, false, true],
        ];
        let mut white = Vec::new();
        let mut black = Vec::new();
        for (row, cells) in pattern.iter().enumerate() {
            for (col, &is_white) in cells.iter().enumerate() {
                if is_white {
                    white.push(Cell::new(row, col));
                } else {
                    black.push(Cell::new(row, col));
                }
            }
        }

        let model = PuzzleModel::new(4, white.clone(), black, vec![], vec![]).unwrap();
        let mut problem =
            PuzzleProblem::with_model(test_settings(SolverBackend::Backtracking), model);

        let grid = problem.solve().unwrap();
        for cell in &white {
            assert_eq!(
                grid.get(cell.row, cell.col),
                crate::puzzle::CellColor::White
            );
        }
    }

    #[test]
    fn test_fully_clued_inconsistent_grid_is_unsatisfiable() {
        // A full clue set that breaks row balance must come back
        // unsatisfiable, not solved.
        let mut white = Vec::new();
        let mut black = Vec::new();
        for row in 0..4 {
            for col in 0..4 {
                if row == 0 || (row, col) == (1, 0) {
                    white.push(Cell::new(row, col));
                } else {
                    black.push(Cell::new(row, col));
                }
            }
        }

        let model = PuzzleModel::new(4, white, black, vec![], vec![]).unwrap();
        let mut problem =
            PuzzleProblem::with_model(test_settings(SolverBackend::Backtracking), model);

        assert!(matches!(
            problem.solve(),
            Err(PuzzleError::Solve(SolveError::Unsatisfiable))
        ));
    }

    #[test]
    fn test_config_error_surfaces_before_solving() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.csv");
        std::fs::write(&path, "3\n0 0\n0 1\n").unwrap();

        let mut settings = test_settings(SolverBackend::Backtracking);
        settings.input.puzzle_file = path;

        let result = PuzzleProblem::new(settings);
        assert!(matches!(
            result,
            Err(PuzzleError::Config(ConfigError::InvalidSize(3)))
        ));
    }
}
