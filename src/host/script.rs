//! Scripted input: a YAML list of input snapshots replayed one per frame

use super::frame::{FrameLoop, FrameReport};
use super::input::InputSnapshot;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, Instant};

/// Longest script accepted, in frames
pub const MAX_SCRIPT_FRAMES: u64 = 1_000_000;

/// One scripted input snapshot, held for `repeat` frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    #[serde(flatten)]
    pub input: InputSnapshot,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

fn default_repeat() -> u32 {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub frames: Vec<ScriptFrame>,
}

impl InputScript {
    pub fn from_yaml(content: &str) -> Result<Self> {
        let script: Self = serde_yaml::from_str(content).context("Failed to parse input script")?;
        if script.len() > MAX_SCRIPT_FRAMES {
            anyhow::bail!(
                "Input script spans {} frames, more than the limit of {}",
                script.len(),
                MAX_SCRIPT_FRAMES
            );
        }
        Ok(script)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input script: {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("In script {}", path.display()))
    }

    /// Total frames the script spans
    pub fn len(&self) -> u64 {
        self.frames.iter().map(|frame| u64::from(frame.repeat)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Feed every scripted frame through `frame_loop` on a virtual clock
    /// advancing `frame_time` per frame, starting at `start`.
    pub fn replay(
        &self,
        frame_loop: &mut FrameLoop,
        start: Instant,
        frame_time: Duration,
    ) -> Vec<FrameReport> {
        let mut reports = Vec::new();
        let mut now = start;

        for frame in &self.frames {
            for _ in 0..frame.repeat {
                reports.push(frame_loop.update(frame.input.clone(), now));
                now += frame_time;
            }
        }

        reports
    }
}
