//! SAT encoding and oracle backends for the mosaic puzzle

pub mod backtracking;
pub mod constraints;
pub mod encoder;
pub mod solver;
pub mod solver_factory;
pub mod variables;

pub use backtracking::BacktrackingSolver;
pub use constraints::{Clause, ConstraintGenerator};
pub use encoder::SatEncoder;
pub use solver::{Assignment, CadicalSolver, SolverOptions, SolverOutcome};
pub use solver_factory::UnifiedSatSolver;
pub use variables::VariableManager;
