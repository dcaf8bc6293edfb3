//! Grid representation and utilities for Game of Life

use itertools::iproduct;
use std::fmt;
use thiserror::Error;

/// Largest width or height a grid may have
pub const MAX_DIMENSION: usize = 16_384;

/// Errors raised by grid construction and bounds-checked access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("grid must have at least one row and one column")]
    Empty,
    #[error("{width}x{height} grid exceeds the maximum side length of 16384")]
    TooLarge { width: usize, height: usize },
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("invalid character '{ch}' at row {row}, column {col}")]
    InvalidCell { ch: char, row: usize, col: usize },
}

/// Represents a fixed-size Game of Life grid.
///
/// Cells are addressed as `(x, y)` with `x` in `0..width` and `y` in
/// `0..height`, stored row-major. The edges do not wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
        if width == 0 || height == 0 {
            Err(GridError::Empty)
        } else if width > MAX_DIMENSION || height > MAX_DIMENSION {
            Err(GridError::TooLarge { width, height })
        } else {
            Ok(())
        }
    }

    /// Create a grid from rows of cells (`cells[y][x]`)
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = cells.len();
        let width = cells.first().map(Vec::len).unwrap_or(0);
        Self::check_dimensions(width, height)?;

        for (row, line) in cells.iter().enumerate() {
            if line.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    found: line.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major cell storage
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether `(x, y)` addresses a cell of this grid
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get cell value at coordinates; out of bounds cells read as dead
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.contains(x, y) && self.cells[self.index(x, y)]
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = alive;
        Ok(())
    }

    /// Count living neighbors of a cell inside the grid
    pub fn count_neighbors(&self, x: usize, y: usize) -> Result<u8, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.live_neighbors(x, y))
    }

    /// Neighbor count for an in-bounds cell. Neighbors past the edge are not counted.
    pub(crate) fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for (dx, dy) in iproduct!(-1isize..=1, -1isize..=1) {
            if dx == 0 && dy == 0 {
                continue;
            }

            let nx = x as isize + dx;
            let ny = y as isize + dy;

            if nx >= 0
                && ny >= 0
                && (nx as usize) < self.width
                && (ny as usize) < self.height
                && self.cells[self.index(nx as usize, ny as usize)]
            {
                count += 1;
            }
        }

        count
    }

    /// Kill every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = false);
    }

    /// Copy the live cells of `pattern` into this grid with its top-left corner
    /// at `(x, y)`. Parts of the pattern that fall outside the grid are dropped.
    /// Returns how many cells were written.
    pub fn stamp(&mut self, pattern: &Grid, x: usize, y: usize) -> usize {
        let mut written = 0;
        for (px, py) in pattern.living_cells() {
            let (Some(tx), Some(ty)) = (x.checked_add(px), y.checked_add(py)) else {
                continue;
            };
            if self.contains(tx, ty) {
                let idx = self.index(tx, ty);
                self.cells[idx] = true;
                written += 1;
            }
        }
        written
    }

    /// Get all living cell coordinates as `(x, y)`, row by row
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(y, x)| self.cells[self.index(x, y)])
            .map(|(y, x)| (x, y))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Smallest `(min_x, min_y, max_x, max_y)` box holding every live cell
    pub fn bounding_box(&self) -> Option<(usize, usize, usize, usize)> {
        self.living_cells().into_iter().fold(None, |acc, (x, y)| match acc {
            None => Some((x, y, x, y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
        })
    }

    /// Replace the cell storage wholesale with one of the same shape
    pub(crate) fn with_cells(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = if self.get(x, y) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.cells().len(), 12);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.living_count(), 5);
    }

    #[test]
    fn test_from_cells_rejects_bad_shapes() {
        assert_eq!(Grid::from_cells(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::from_cells(vec![vec![]]), Err(GridError::Empty));
        assert_eq!(
            Grid::from_cells(vec![vec![true, false], vec![true]]),
            Err(GridError::RaggedRow { row: 1, found: 1, expected: 2 })
        );
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(grid.count_neighbors(1, 1), Ok(8));
        assert_eq!(grid.count_neighbors(0, 0), Ok(2));
    }

    #[test]
    fn test_center_cell_never_counted() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, true).unwrap();
        assert_eq!(grid.count_neighbors(1, 1), Ok(0));
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let mut grid = Grid::new(5, 5).unwrap();
        for (x, y) in [(4, 0), (0, 4), (4, 4), (4, 2), (2, 4)] {
            grid.set(x, y, true).unwrap();
        }

        // Would see the far corners and edges if the grid wrapped
        assert_eq!(grid.count_neighbors(0, 0), Ok(0));
        assert_eq!(grid.count_neighbors(0, 2), Ok(0));
        assert_eq!(grid.count_neighbors(2, 0), Ok(0));
    }

    #[test]
    fn test_corner_and_edge_neighbor_limits() {
        let mut full = Grid::new(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                full.set(x, y, true).unwrap();
            }
        }

        for (x, y) in [(0, 0), (3, 0), (0, 2), (3, 2)] {
            assert_eq!(full.count_neighbors(x, y), Ok(3), "corner ({}, {})", x, y);
        }
        for (x, y) in [(1, 0), (2, 2), (0, 1), (3, 1)] {
            assert_eq!(full.count_neighbors(x, y), Ok(5), "edge ({}, {})", x, y);
        }
        assert_eq!(full.count_neighbors(1, 1), Ok(8));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(matches!(grid.set(3, 0, true), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(grid.count_neighbors(0, 3), Err(GridError::OutOfBounds { .. })));
        assert!(!grid.get(10, 10));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_stamp_clips_at_edges() {
        let pattern = Grid::from_cells(vec![vec![true, true], vec![true, true]]).unwrap();
        let mut grid = Grid::new(4, 4).unwrap();

        assert_eq!(grid.stamp(&pattern, 1, 1), 4);
        assert_eq!(grid.living_cells(), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);

        grid.clear();
        assert_eq!(grid.stamp(&pattern, 3, 3), 1);
        assert!(grid.get(3, 3));
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        assert_eq!(Grid::new(0, 5), Err(GridError::Empty));
        assert_eq!(
            Grid::new(1 << 33, 1 << 31),
            Err(GridError::TooLarge { width: 1 << 33, height: 1 << 31 })
        );
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(GridError::TooLarge { width: usize::MAX, height: 2 })
        );
        assert!(Grid::new(MAX_DIMENSION, 1).is_ok());
    }

    #[test]
    fn test_stamp_far_offset_does_not_overflow() {
        let pattern = Grid::from_cells(vec![vec![true, true]]).unwrap();
        let mut grid = Grid::new(4, 4).unwrap();

        assert_eq!(grid.stamp(&pattern, usize::MAX, 0), 0);
        assert_eq!(grid.stamp(&pattern, 0, usize::MAX), 0);
        assert_eq!(grid.stamp(&pattern, usize::MAX - 1, 1), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_bounding_box() {
        let mut grid = Grid::new(10, 10).unwrap();
        assert_eq!(grid.bounding_box(), None);
        grid.set(2, 7, true).unwrap();
        grid.set(5, 3, true).unwrap();
        assert_eq!(grid.bounding_box(), Some((2, 3, 5, 7)));
    }
}
