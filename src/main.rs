//! Command line front end for the interactive Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use game_of_life_interactive::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::load_grid_from_file,
    host::{FrameLoop, InputScript, InputSnapshot},
    utils::{ColorOutput, GridFormatter},
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

/// Grids up to this width are printed whole
const SMALL_GRID: usize = 40;

#[derive(Parser)]
#[command(name = "life")]
#[command(about = "Conway's Game of Life on a fixed grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation headless for a number of frames
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/life.yaml")]
        config: PathBuf,

        /// Pattern file stamped at the center of the grid
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Number of host frames to simulate
        #[arg(short, long, default_value_t = 100)]
        frames: u64,

        #[command(flatten)]
        overrides: OverrideArgs,

        /// Print the live region of the final grid
        #[arg(long)]
        show_grid: bool,
    },

    /// Replay a YAML input script through the frame loop
    Script {
        /// Configuration file path
        #[arg(short, long, default_value = "config/life.yaml")]
        config: PathBuf,

        /// Input script file
        script: PathBuf,

        #[command(flatten)]
        overrides: OverrideArgs,

        /// Print the live region of the final grid
        #[arg(long)]
        show_grid: bool,
    },

    /// Write a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
struct OverrideArgs {
    /// Grid width (overrides config)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (overrides config)
    #[arg(long)]
    height: Option<usize>,

    /// Step once every N frames (overrides config)
    #[arg(long, conflicts_with = "interval_ms")]
    every: Option<u64>,

    /// Step on a wall-clock interval in milliseconds (overrides config)
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Simulated host frame rate
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Summary format (overrides config)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl OverrideArgs {
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            width: self.width,
            height: self.height,
            step_every_frames: self.every,
            step_interval_ms: self.interval_ms,
            format: self.format.map(OutputFormat::from),
        }
    }

    fn frame_time(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match dispatch(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", err)));
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            config,
            pattern,
            frames,
            overrides,
            show_grid,
        } => run_command(config, pattern, frames, overrides, show_grid),
        Commands::Script {
            config,
            script,
            overrides,
            show_grid,
        } => script_command(config, script, overrides, show_grid),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &Path, overrides: &OverrideArgs) -> Result<Settings> {
    let mut settings = Settings::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    settings.merge_with_cli(&overrides.cli_overrides());
    settings.validate().context("Configuration validation failed")?;

    log::debug!("Settings: {:?}", settings);
    Ok(settings)
}

fn print_result(frame_loop: &FrameLoop, format: OutputFormat, show_grid: bool) -> Result<()> {
    println!("{}", GridFormatter::format_summary(&frame_loop.summary(), format)?);

    if show_grid {
        let grid = frame_loop.session().grid();
        if grid.width() <= SMALL_GRID {
            println!("{}", GridFormatter::format_grid_with_coords(grid));
        } else {
            println!("{}", GridFormatter::format_live_region(grid, 1));
        }
    }

    Ok(())
}

fn run_command(
    config_path: PathBuf,
    pattern_path: Option<PathBuf>,
    frames: u64,
    overrides: OverrideArgs,
    show_grid: bool,
) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let mut frame_loop = FrameLoop::from_settings(&settings)?;

    if let Some(path) = pattern_path {
        let pattern = load_grid_from_file(&path)?;
        let session = frame_loop.session_mut();
        let x = session.width().saturating_sub(pattern.width()) / 2;
        let y = session.height().saturating_sub(pattern.height()) / 2;
        let written = session.stamp(&pattern, x, y);
        if written < pattern.living_count() {
            eprintln!(
                "{}",
                ColorOutput::warning(&format!(
                    "Pattern {} does not fit the grid; {} of {} live cells kept",
                    path.display(),
                    written,
                    pattern.living_count()
                ))
            );
        }
        log::info!("Stamped {} at ({}, {})", path.display(), x, y);
    }

    if !frame_loop.session().is_running() {
        frame_loop.session_mut().toggle_running();
    }

    let frame_time = overrides.frame_time();
    let start = Instant::now();
    for i in 0..frames {
        let now = start + frame_time.mul_f64(i as f64);
        frame_loop.update(InputSnapshot::default(), now);
    }

    print_result(&frame_loop, settings.output.format, show_grid)
}

fn script_command(
    config_path: PathBuf,
    script_path: PathBuf,
    overrides: OverrideArgs,
    show_grid: bool,
) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let script = InputScript::from_file(&script_path)?;
    let mut frame_loop = FrameLoop::from_settings(&settings)?;

    let reports = script.replay(&mut frame_loop, Instant::now(), overrides.frame_time());
    let actions: usize = reports.iter().map(|report| report.actions.len()).sum();
    let replayed = format!("Replayed {} frames, {} input actions", reports.len(), actions);
    println!("{}", ColorOutput::info(&replayed));

    print_result(&frame_loop, settings.output.format, show_grid)
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_path = directory.join("config/life.yaml");

    if config_path.exists() && !force {
        println!("Skipped: {} (already exists)", config_path.display());
        return Ok(());
    }

    Settings::default()
        .to_file(&config_path)
        .context("Failed to create default configuration")?;
    println!("{}", ColorOutput::success(&format!("Created: {}", config_path.display())));

    Ok(())
}
