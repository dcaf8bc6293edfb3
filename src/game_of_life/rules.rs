//! Game of Life rules implementation

use super::Grid;
use rayon::prelude::*;

/// Game of Life rules engine (B3/S23)
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation into a freshly allocated grid.
    ///
    /// Every cell is decided from `current` alone, so no cell ever observes a
    /// neighbor that was already updated in the same pass.
    pub fn evolve(current: &Grid) -> Grid {
        let width = current.width();

        let next_cells: Vec<bool> = (0..current.height())
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..width).map(move |x| {
                    Self::should_be_alive(current.get(x, y), current.live_neighbors(x, y))
                })
            })
            .collect();

        current.with_cells(next_cells)
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    /// Check if a cell should be alive in the next generation given its current
    /// state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        match (current_state, neighbor_count) {
            (false, 3) => true,
            (true, count) if count < 2 || count > 3 => false,
            (state, _) => state,
        }
    }

    /// Neighbor counts that bring a dead cell to life
    pub fn birth_neighbor_counts() -> &'static [u8] {
        &[3]
    }

    /// Neighbor counts that keep a live cell alive
    pub fn survival_neighbor_counts() -> &'static [u8] {
        &[2, 3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in live {
            grid.set(x, y, true).unwrap();
        }
        grid
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let grid = Grid::new(16, 9).unwrap();
        let evolved = GameOfLifeRules::evolve(&grid);
        assert!(evolved.is_empty());
        assert_eq!(evolved.width(), 16);
        assert_eq!(evolved.height(), 9);
    }

    #[test]
    fn test_still_life_block() {
        let grid = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let evolved = GameOfLifeRules::evolve(&grid);

        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = grid_with(12, 12, &[(5, 5), (6, 5), (7, 5)]);
        let vertical = grid_with(12, 12, &[(6, 4), (6, 5), (6, 6)]);

        let evolved = GameOfLifeRules::evolve(&horizontal);
        assert_eq!(evolved, vertical);

        let evolved_twice = GameOfLifeRules::evolve(&evolved);
        assert_eq!(evolved_twice, horizontal);
    }

    #[test]
    fn test_blinker_on_the_edge_is_clipped() {
        // Along the top edge the vertical phase loses its upper cell
        let grid = grid_with(5, 5, &[(1, 0), (2, 0), (3, 0)]);
        let evolved = GameOfLifeRules::evolve(&grid);
        assert_eq!(evolved.living_cells(), vec![(2, 0), (2, 1)]);
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let glider = grid_with(10, 10, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let moved = GameOfLifeRules::evolve_generations(glider, 4);
        let expected = grid_with(10, 10, &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
        assert_eq!(moved, expected);
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
        assert!(GameOfLifeRules::should_be_alive(false, 3));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
        assert!(!GameOfLifeRules::should_be_alive(true, 4));
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
        assert!(!GameOfLifeRules::should_be_alive(false, 8));
    }

    #[test]
    fn test_rule_tables_agree_with_should_be_alive() {
        for count in 0..=8u8 {
            assert_eq!(
                GameOfLifeRules::should_be_alive(false, count),
                GameOfLifeRules::birth_neighbor_counts().contains(&count)
            );
            assert_eq!(
                GameOfLifeRules::should_be_alive(true, count),
                GameOfLifeRules::survival_neighbor_counts().contains(&count)
            );
        }
    }
}
