//! Host-side adapters around a session: input, view, rendering and the frame loop
//!
//! Nothing here depends on a windowing toolkit. A host samples its input into
//! an [`InputSnapshot`] each frame, calls [`FrameLoop::update`], and rasterizes
//! the [`DisplayList`] returned by [`FrameLoop::render`].

pub mod frame;
pub mod input;
pub mod render;
pub mod script;
pub mod view;

pub use frame::{FrameLoop, FrameReport, RunSummary};
pub use input::{Action, InputSnapshot, InputState, Key};
pub use render::{build_display_list, DisplayList, Paint, Rect};
pub use script::{InputScript, ScriptFrame};
pub use view::View;
