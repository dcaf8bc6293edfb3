//! Configuration settings for the Game of Life session

use crate::game_of_life::grid::MAX_DIMENSION;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub view: ViewConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub pacing: PacingMode,
    /// Apply one generation every this many frames
    pub step_every_frames: u64,
    /// Wall-clock interval between generations
    pub step_interval_ms: u64,
    pub start_running: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacingMode {
    Frames,
    WallClock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Side of one cell in world pixels
    pub cell_size: u32,
    pub scale: f32,
    pub draw_cross: bool,
    pub draw_grid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 511,
            height: 511,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            pacing: PacingMode::Frames,
            step_every_frames: 10,
            step_interval_ms: 166,
            start_running: false,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            cell_size: 2,
            scale: 1.0,
            draw_cross: true,
            draw_grid: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
        }
    }
}

impl SimulationConfig {
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::warn!("Config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }

        match self.simulation.pacing {
            PacingMode::Frames if self.simulation.step_every_frames == 0 => {
                anyhow::bail!("step_every_frames must be positive");
            }
            PacingMode::WallClock if self.simulation.step_interval_ms == 0 => {
                anyhow::bail!("step_interval_ms must be positive");
            }
            _ => {}
        }

        if self.grid.width > MAX_DIMENSION || self.grid.height > MAX_DIMENSION {
            anyhow::bail!(
                "Grid dimensions must be at most {}x{}, got {}x{}",
                MAX_DIMENSION,
                MAX_DIMENSION,
                self.grid.width,
                self.grid.height
            );
        }

        if self.view.cell_size == 0 {
            anyhow::bail!("Cell size must be positive");
        }

        // Hosts rasterize in 32-bit pixel coordinates
        let side = self.grid.width.max(self.grid.height) as u64;
        if side * u64::from(self.view.cell_size) > u64::from(u32::MAX) {
            anyhow::bail!(
                "Grid of {}x{} cells at cell size {} does not fit in 32-bit pixel coordinates",
                self.grid.width,
                self.grid.height,
                self.view.cell_size
            );
        }

        if !(self.view.scale.is_finite() && self.view.scale > 0.0) {
            anyhow::bail!("View scale must be a positive number, got {}", self.view.scale);
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(every) = cli_overrides.step_every_frames {
            self.simulation.pacing = PacingMode::Frames;
            self.simulation.step_every_frames = every;
        }
        if let Some(interval) = cli_overrides.step_interval_ms {
            self.simulation.pacing = PacingMode::WallClock;
            self.simulation.step_interval_ms = interval;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub step_every_frames: Option<u64>,
    pub step_interval_ms: Option<u64>,
    pub format: Option<OutputFormat>,
}
