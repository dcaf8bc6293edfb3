//! The automaton engine: one owned grid plus its run state

use crate::config::Settings;
use crate::game_of_life::{GameOfLifeRules, Grid, GridError};

/// An interactive Game of Life session.
///
/// Owns the current grid, whether the simulation is running, and how many
/// generations have been computed. Edits and steps go through `&mut self`;
/// renderers only ever need `&Session`.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    running: bool,
    generation: u64,
}

impl Session {
    /// Create a paused session with an all-dead `width` x `height` grid
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::new(width, height)?))
    }

    /// Create a paused session around an existing grid
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            running: false,
            generation: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, GridError> {
        let mut session = Self::new(settings.grid.width, settings.grid.height)?;
        session.running = settings.simulation.start_running;
        Ok(session)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of generations computed since the session was created
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }

    /// Live neighbors of `(x, y)`, not counting the cell itself
    pub fn count_neighbors(&self, x: usize, y: usize) -> Result<u8, GridError> {
        self.grid.count_neighbors(x, y)
    }

    /// Write a single cell
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        self.grid.set(x, y, alive)
    }

    /// Copy a pattern's live cells into the grid at `(x, y)`
    pub fn stamp(&mut self, pattern: &Grid, x: usize, y: usize) -> usize {
        self.grid.stamp(pattern, x, y)
    }

    /// Advance one generation, replacing the grid with the computed successor
    pub fn step(&mut self) {
        self.grid = GameOfLifeRules::evolve(&self.grid);
        self.generation += 1;
        log::trace!(
            "generation {}: {} live cells",
            self.generation,
            self.grid.living_count()
        );
    }

    /// Kill every cell. Dimensions and run state are kept.
    pub fn reset(&mut self) {
        self.grid.clear();
        log::debug!("grid reset ({}x{})", self.width(), self.height());
    }

    /// Flip between running and paused, returning the new state
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        log::debug!("simulation {}", if self.running { "running" } else { "paused" });
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(live: &[(usize, usize)]) -> Session {
        let mut session = Session::new(20, 20).unwrap();
        for &(x, y) in live {
            session.set_cell(x, y, true).unwrap();
        }
        session
    }

    #[test]
    fn test_new_session_is_paused_and_dead() {
        let session = Session::new(511, 511).unwrap();
        assert!(!session.is_running());
        assert_eq!(session.generation(), 0);
        assert_eq!(session.width(), 511);
        assert_eq!(session.height(), 511);
        assert!(session.grid().is_empty());
    }

    #[test]
    fn test_step_on_dead_grid_stays_dead() {
        let mut session = Session::new(30, 17).unwrap();
        session.step();
        session.step();
        assert!(session.grid().is_empty());
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn test_blinker_period_two() {
        let mut session = session_with(&[(5, 5), (6, 5), (7, 5)]);

        session.step();
        assert_eq!(session.grid().living_cells(), vec![(6, 4), (6, 5), (6, 6)]);

        session.step();
        assert_eq!(session.grid().living_cells(), vec![(5, 5), (6, 5), (7, 5)]);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut session = session_with(&[(3, 3), (4, 3), (3, 4), (4, 4)]);
        let before = session.grid().clone();
        session.step();
        assert_eq!(session.grid(), &before);
    }

    #[test]
    fn test_set_cell_visible_to_neighbor_count_without_step() {
        let mut session = Session::new(10, 10).unwrap();
        assert_eq!(session.count_neighbors(4, 4), Ok(0));

        session.set_cell(5, 5, true).unwrap();
        assert_eq!(session.count_neighbors(4, 4), Ok(1));
        assert_eq!(session.count_neighbors(5, 5), Ok(0));

        session.set_cell(5, 5, false).unwrap();
        assert_eq!(session.count_neighbors(4, 4), Ok(0));
    }

    #[test]
    fn test_set_cell_out_of_bounds_leaves_grid_untouched() {
        let mut session = Session::new(4, 4).unwrap();
        let err = session.set_cell(4, 0, true).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds { x: 4, y: 0, width: 4, height: 4 }
        );
        assert!(session.grid().is_empty());
    }

    #[test]
    fn test_reset_clears_but_keeps_shape_and_run_state() {
        let mut session = session_with(&[(1, 1), (2, 1), (3, 1), (10, 10)]);
        session.toggle_running();

        session.reset();
        assert!(session.grid().is_empty());
        assert_eq!(session.width(), 20);
        assert_eq!(session.height(), 20);
        assert!(session.is_running());

        session.step();
        assert!(session.grid().is_empty());
    }

    #[test]
    fn test_toggle_running_in_pairs() {
        let mut session = Session::new(3, 3).unwrap();
        assert!(session.toggle_running());
        assert!(!session.toggle_running());
        assert!(!session.is_running());
    }

    #[test]
    fn test_oversized_settings_do_not_build_a_session() {
        let mut settings = Settings::default();
        settings.grid.width = 1 << 33;
        settings.grid.height = 1 << 31;
        assert!(matches!(
            Session::from_settings(&settings),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        settings.grid.width = 8;
        settings.grid.height = 6;
        settings.simulation.start_running = true;

        let session = Session::from_settings(&settings).unwrap();
        assert_eq!((session.width(), session.height()), (8, 6));
        assert!(session.is_running());
    }
}
