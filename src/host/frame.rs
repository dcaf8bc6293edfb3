//! The per-frame update cycle: input, then step, then render

use super::input::{Action, InputSnapshot, InputState};
use super::render::{build_display_list, DisplayList};
use super::View;
use crate::config::Settings;
use crate::game_of_life::GridError;
use crate::session::{Pacing, Session};
use serde::Serialize;
use std::time::Instant;

/// Outcome of one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub actions: Vec<Action>,
    pub stepped: bool,
}

/// Drives a session the way a host game loop would.
pub struct FrameLoop {
    session: Session,
    view: View,
    input: InputState,
    pacing: Pacing,
    frames: u64,
}

impl FrameLoop {
    pub fn new(session: Session, view: View, pacing: Pacing) -> Self {
        Self {
            session,
            view,
            input: InputState::new(),
            pacing,
            frames: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, GridError> {
        Ok(Self::new(
            Session::from_settings(settings)?,
            View::from_config(&settings.view),
            Pacing::from_config(&settings.simulation),
        ))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one update: apply `snapshot`, then step if the session is running
    /// and the pacing says this frame is due.
    pub fn update(&mut self, snapshot: InputSnapshot, now: Instant) -> FrameReport {
        self.frames += 1;
        self.input.advance(snapshot);

        let actions = self.input.apply(&mut self.session, &mut self.view);
        for action in &actions {
            log::info!("frame {}: {:?}", self.frames, action);
        }

        let due = self.pacing.tick(now);
        let stepped = due && self.session.is_running();
        if stepped {
            self.session.step();
        }

        FrameReport {
            frame: self.frames,
            actions,
            stepped,
        }
    }

    /// Display list reflecting the state after the last update
    pub fn render(&self) -> DisplayList {
        build_display_list(&self.session, &self.view, &self.input)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary::of(&self.session, self.frames)
    }
}

/// Snapshot of a session for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub width: usize,
    pub height: usize,
    pub frames: u64,
    pub generations: u64,
    pub running: bool,
    pub living_cells: usize,
    /// `[min_x, min_y, max_x, max_y]` of the live cells
    pub bounding_box: Option<[usize; 4]>,
}

impl RunSummary {
    pub fn of(session: &Session, frames: u64) -> Self {
        let grid = session.grid();
        Self {
            width: grid.width(),
            height: grid.height(),
            frames,
            generations: session.generation(),
            running: session.is_running(),
            living_cells: grid.living_count(),
            bounding_box: grid.bounding_box().map(|(x0, y0, x1, y1)| [x0, y0, x1, y1]),
        }
    }
}
