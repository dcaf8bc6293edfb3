//! Simulation session: the owned automaton state and its step pacing

pub mod engine;
pub mod pacing;

pub use engine::Session;
pub use pacing::Pacing;
