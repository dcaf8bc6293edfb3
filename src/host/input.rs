//! Translating sampled host input into session commands

use super::View;
use crate::session::Session;
use serde::{Deserialize, Serialize};

/// Keys the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Toggle running
    Space,
    /// Reset the grid
    R,
    /// Reset the view scale
    S,
    /// Toggle the center cross
    C,
    /// Toggle grid lines
    G,
}

/// Input as sampled once per frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSnapshot {
    /// Pointer position in window pixels, if the pointer is over the window
    pub pointer: Option<(f32, f32)>,
    pub primary: bool,
    pub secondary: bool,
    /// Accumulated scroll wheel value
    pub scroll: i32,
    /// Keys held down
    pub keys: Vec<Key>,
}

impl InputSnapshot {
    pub fn is_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

/// What a frame's input did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    ToggledRunning { running: bool },
    Reset,
    ResetScale,
    ToggledCross { visible: bool },
    ToggledGrid { visible: bool },
    Painted { x: usize, y: usize, alive: bool },
    Zoomed { scale: f32 },
}

/// The previous and current input snapshots
#[derive(Debug, Clone, Default)]
pub struct InputState {
    previous: InputSnapshot,
    current: InputSnapshot,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame with a freshly sampled snapshot
    pub fn advance(&mut self, next: InputSnapshot) {
        self.previous = std::mem::replace(&mut self.current, next);
    }

    pub fn current(&self) -> &InputSnapshot {
        &self.current
    }

    /// Whether `key` went down between the previous and current snapshot
    pub fn pressed(&self, key: Key) -> bool {
        self.current.is_down(key) && !self.previous.is_down(key)
    }

    pub fn scroll_delta(&self) -> i32 {
        self.current.scroll.saturating_sub(self.previous.scroll)
    }

    /// The cell under the pointer, if any
    pub fn hovered_cell(&self, view: &View, session: &Session) -> Option<(usize, usize)> {
        let (px, py) = self.current.pointer?;
        view.pointer_to_cell(px, py, session.width(), session.height())
    }

    /// Apply this frame's input to the session and view.
    ///
    /// Key presses are handled first, then painting (only while paused, so a
    /// pause pressed this frame already allows painting), then zoom.
    pub fn apply(&self, session: &mut Session, view: &mut View) -> Vec<Action> {
        let mut actions = Vec::new();

        if self.pressed(Key::Space) {
            let running = session.toggle_running();
            actions.push(Action::ToggledRunning { running });
        }
        if self.pressed(Key::R) {
            session.reset();
            actions.push(Action::Reset);
        }
        if self.pressed(Key::S) {
            view.reset_scale();
            actions.push(Action::ResetScale);
        }
        if self.pressed(Key::C) {
            view.draw_cross = !view.draw_cross;
            actions.push(Action::ToggledCross { visible: view.draw_cross });
        }
        if self.pressed(Key::G) {
            view.draw_grid = !view.draw_grid;
            actions.push(Action::ToggledGrid { visible: view.draw_grid });
        }

        if !session.is_running() {
            let target = match (self.current.primary, self.current.secondary) {
                (true, _) => Some(true),
                (false, true) => Some(false),
                (false, false) => None,
            };

            if let (Some(alive), Some((x, y))) = (target, self.hovered_cell(view, session)) {
                // hovered_cell only yields in-bounds cells
                if session.set_cell(x, y, alive).is_ok() {
                    actions.push(Action::Painted { x, y, alive });
                }
            }
        }

        let delta = self.scroll_delta();
        if delta != 0 {
            view.zoom_by_scroll(delta);
            actions.push(Action::Zoomed { scale: view.scale });
        }

        actions
    }
}
