//! Game of Life core functionality

pub mod grid;
pub mod rules;
pub mod io;

pub use grid::{Grid, GridError};
pub use rules::GameOfLifeRules;
pub use io::{load_grid_from_file, parse_grid_from_string, grid_to_string};
