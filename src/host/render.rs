//! Per-frame display list for a host renderer

use super::{InputState, View};
use crate::session::Session;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    White,
    Black,
    Red,
    Gray,
}

/// A filled axis-aligned rectangle in world pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: u64,
    pub y: u64,
    pub width: u64,
    pub height: u64,
    pub paint: Paint,
}

impl Rect {
    fn new(x: u64, y: u64, width: u64, height: u64, paint: Paint) -> Self {
        Self { x, y, width, height, paint }
    }
}

/// Everything a host needs to draw one frame. Rectangles are in world
/// pixels and are drawn in order after clearing to `background`; the host
/// multiplies them by `scale`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayList {
    pub background: Paint,
    pub scale: f32,
    pub rects: Vec<Rect>,
}

impl DisplayList {
    pub fn count(&self, paint: Paint) -> usize {
        self.rects.iter().filter(|rect| rect.paint == paint).count()
    }
}

/// Build the display list for the current session state
pub fn build_display_list(session: &Session, view: &View, input: &InputState) -> DisplayList {
    // Grid sides are capped well below 2^32 and cell_size is a u32, so
    // world coordinates always fit in a u64.
    let cell = u64::from(view.cell_size);
    let (cols, rows) = (session.width() as u64, session.height() as u64);
    let (world_w, world_h) = (cols * cell, rows * cell);
    let grid = session.grid();

    let mut rects = Vec::with_capacity(grid.living_count() + 8);

    if view.draw_grid {
        rects.extend((0..cols).map(|x| Rect::new(x * cell, 0, 1, world_h, Paint::Black)));
        rects.extend((0..rows).map(|y| Rect::new(0, y * cell, world_w, 1, Paint::Black)));
    }

    rects.extend(
        grid.living_cells()
            .into_iter()
            .map(|(x, y)| Rect::new(x as u64 * cell, y as u64 * cell, cell, cell, Paint::Black)),
    );

    // Border
    rects.push(Rect::new(0, 0, world_w, 1, Paint::Black));
    rects.push(Rect::new(0, 0, 1, world_h, Paint::Black));
    rects.push(Rect::new(0, world_h, world_w, 1, Paint::Black));
    rects.push(Rect::new(world_w, 0, 1, world_h, Paint::Black));

    if view.draw_cross {
        rects.push(Rect::new(0, world_h / 2, world_w, 1, Paint::Red));
        rects.push(Rect::new(world_w / 2, 0, 1, world_h, Paint::Red));
    }

    if !session.is_running() {
        if let Some((x, y)) = input.hovered_cell(view, session) {
            rects.push(Rect::new(x as u64 * cell, y as u64 * cell, cell, cell, Paint::Gray));
        }
    }

    DisplayList {
        background: Paint::White,
        scale: view.scale,
        rects,
    }
}
