//! Deciding on which host frames the simulation advances

use crate::config::{PacingMode, SimulationConfig};
use std::time::{Duration, Instant};

/// How often a running session is stepped relative to the host's frames.
///
/// Frame pacing reproduces the classic "one generation every N frames"
/// throttle, which ties simulation speed to the frame rate. Wall-clock pacing
/// steps on a fixed real-time interval instead, but never more than once per
/// frame.
#[derive(Debug, Clone)]
pub struct Pacing {
    mode: Mode,
}

#[derive(Debug, Clone)]
enum Mode {
    /// `every` is at least 1
    Frames { every: u64, frame: u64 },
    WallClock {
        interval: Duration,
        last_step: Option<Instant>,
    },
}

impl Pacing {
    /// Step on every `every`th frame. A cadence of 0 is treated as 1.
    pub fn every_frames(every: u64) -> Self {
        Self {
            mode: Mode::Frames {
                every: every.max(1),
                frame: 0,
            },
        }
    }

    pub fn wall_clock(interval: Duration) -> Self {
        Self {
            mode: Mode::WallClock {
                interval,
                last_step: None,
            },
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        match config.pacing {
            PacingMode::Frames => Self::every_frames(config.step_every_frames),
            PacingMode::WallClock => Self::wall_clock(config.step_interval()),
        }
    }

    /// Register one host frame at `now` and report whether a running
    /// simulation should step on it.
    ///
    /// The frame counter advances whether or not the simulation is running,
    /// like the host's update tick it mirrors.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &mut self.mode {
            Mode::Frames { every, frame } => {
                *frame = frame.wrapping_add(1);
                *frame % *every == 0
            }
            Mode::WallClock {
                interval,
                last_step,
            } => {
                let due = last_step.map_or(true, |last| now.duration_since(last) >= *interval);
                if due {
                    *last_step = Some(now);
                }
                due
            }
        }
    }

    /// Frames seen so far, when pacing by frames
    pub fn frame(&self) -> Option<u64> {
        match self.mode {
            Mode::Frames { frame, .. } => Some(frame),
            Mode::WallClock { .. } => None,
        }
    }

    /// Frame cadence, when pacing by frames
    pub fn every(&self) -> Option<u64> {
        match self.mode {
            Mode::Frames { every, .. } => Some(every),
            Mode::WallClock { .. } => None,
        }
    }

    /// Step interval, when pacing by wall clock
    pub fn interval(&self) -> Option<Duration> {
        match self.mode {
            Mode::Frames { .. } => None,
            Mode::WallClock { interval, .. } => Some(interval),
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::every_frames(10)
    }
}
