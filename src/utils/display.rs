//! Terminal output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::Grid;
use crate::host::RunSummary;
use anyhow::Result;

/// Format grids and run summaries for the terminal
pub struct GridFormatter;

impl GridFormatter {
    /// Format a whole grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        Self::format_window(grid, 0, 0, grid.width(), grid.height())
    }

    /// Format the part of the grid holding live cells, padded by `margin`
    /// cells and labelled with its coordinate range
    pub fn format_live_region(grid: &Grid, margin: usize) -> String {
        let Some((x0, y0, x1, y1)) = grid.bounding_box() else {
            return "(no live cells)\n".to_string();
        };

        let left = x0.saturating_sub(margin);
        let top = y0.saturating_sub(margin);
        let right = x1.saturating_add(margin).saturating_add(1).min(grid.width());
        let bottom = y1.saturating_add(margin).saturating_add(1).min(grid.height());

        let mut output = format!("Region x={}..{} y={}..{}:\n", left, right, top, bottom);
        output.push_str(&Self::format_window(grid, left, top, right, bottom));
        output
    }

    fn format_window(grid: &Grid, left: usize, top: usize, right: usize, bottom: usize) -> String {
        let mut output = String::with_capacity((right - left + 1) * (bottom - top));
        for y in top..bottom {
            for x in left..right {
                output.push(if grid.get(x, y) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..grid.height() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.width() {
                output.push_str(if grid.get(x, y) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Format a run summary in the configured output format
    pub fn format_summary(summary: &RunSummary, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Text => {
                let mut output = String::new();
                output.push_str(&format!("Grid: {}x{}\n", summary.width, summary.height));
                output.push_str(&format!("Frames: {}\n", summary.frames));
                output.push_str(&format!("Generations: {}\n", summary.generations));
                output.push_str(&format!(
                    "State: {}\n",
                    if summary.running { "running" } else { "paused" }
                ));
                output.push_str(&format!("Living Cells: {}\n", summary.living_cells));
                if let Some([x0, y0, x1, y1]) = summary.bounding_box {
                    output.push_str(&format!("Bounds: ({}, {}) to ({}, {})\n", x0, y0, x1, y1));
                }
                Ok(output)
            }
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
