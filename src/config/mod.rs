//! Configuration management for the Game of Life session

pub mod settings;

pub use settings::{
    Settings, GridConfig, SimulationConfig, ViewConfig, OutputConfig,
    PacingMode, OutputFormat, CliOverrides
};
