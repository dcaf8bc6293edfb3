//! Cosmetic view state shared by input handling and rendering

use crate::config::ViewConfig;

/// Smallest zoom the scroll wheel can reach
pub const MIN_SCALE: f32 = 0.05;

/// Scroll wheel units per unit of scale
const SCROLL_UNITS_PER_SCALE: f32 = 8000.0;

/// How the grid is laid out on screen. None of this touches simulation state.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub cell_size: u32,
    pub scale: f32,
    pub draw_cross: bool,
    pub draw_grid: bool,
}

impl View {
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            cell_size: config.cell_size.max(1),
            scale: config.scale.max(MIN_SCALE),
            draw_cross: config.draw_cross,
            draw_grid: config.draw_grid,
        }
    }

    /// Map a pointer position in window pixels to the grid cell under it.
    /// Returns `None` when the pointer is outside a `width` x `height` grid.
    pub fn pointer_to_cell(
        &self,
        px: f32,
        py: f32,
        width: usize,
        height: usize,
    ) -> Option<(usize, usize)> {
        let cell_px = self.cell_size as f32 * self.scale;
        let fx = (px / cell_px).floor();
        let fy = (py / cell_px).floor();

        if !(fx.is_finite() && fy.is_finite()) || fx < 0.0 || fy < 0.0 {
            return None;
        }

        let (x, y) = (fx as usize, fy as usize);
        (x < width && y < height).then_some((x, y))
    }

    pub fn reset_scale(&mut self) {
        self.scale = 1.0;
    }

    /// Apply a scroll wheel movement (current minus previous accumulator)
    pub fn zoom_by_scroll(&mut self, scroll_delta: i32) {
        self.scale = (self.scale + scroll_delta as f32 / SCROLL_UNITS_PER_SCALE).max(MIN_SCALE);
    }
}

impl Default for View {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}
