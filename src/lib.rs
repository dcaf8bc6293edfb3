//! Interactive Game of Life
//!
//! A fixed-size Conway's Game of Life grid owned by a [`Session`] that can be
//! edited cell by cell while paused and stepped one generation at a time,
//! plus toolkit-independent input, rendering and frame-loop adapters for
//! hosting it in an interactive program.

pub mod config;
pub mod game_of_life;
pub mod host;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Grid, GridError};
pub use host::FrameLoop;
pub use session::{Pacing, Session};
