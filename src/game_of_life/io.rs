//! Plain-text pattern format for Game of Life grids
//!
//! Each non-empty line is a row. `1`, `#` and `O` mark live cells; `0` and
//! `.` mark dead ones. Lines starting with `!` are comments.

use super::{Grid, GridError};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a pattern grid from a text file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Parse a grid from a string representation
pub fn parse_grid_from_string(content: &str) -> Result<Grid, GridError> {
    let cells = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('!'))
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '1' | '#' | 'O' => Ok(true),
                    '0' | '.' => Ok(false),
                    _ => Err(GridError::InvalidCell { ch, row, col }),
                })
                .collect::<Result<Vec<bool>, GridError>>()
        })
        .collect::<Result<Vec<_>, GridError>>()?;

    Grid::from_cells(cells)
}

/// Convert a grid to its `1`/`0` string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height() * (grid.width() + 1));

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            result.push(if grid.get(x, y) { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}
