//! Configuration management for the mosaic puzzle solver

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings, SolverBackend, SolverConfig,
};
