use std::path::PathBuf;

use clap::{ArgAction, Parser};
use shared::animation::DELAY;
use shared::render::CELL_SIZE;

/// Largest frame side a GIF logical screen can describe.
const MAX_FRAME_SIDE: u64 = u16::MAX as u64;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive")]
    NotPositive { name: &'static str },

    #[error("frame of {width}x{height} pixels is too large for a GIF (max 65535 per side)")]
    FrameTooLarge { width: u64, height: u64 },
}

/// Render Conway's Game of Life into an animated GIF.
#[derive(Debug, Parser)]
#[command(version, disable_help_flag = true)]
pub struct Cli {
    /// Output file name
    #[arg(short, long, default_value = "life.gif")]
    output: PathBuf,

    /// Number of life cycles
    #[arg(short = 'n', long, default_value_t = 100)]
    generations: usize,

    /// Grid width
    #[arg(short, long, short_alias = 'x', default_value_t = 100)]
    width: usize,

    /// Grid height
    #[arg(short = 'h', long, short_alias = 'y', default_value_t = 100)]
    height: usize,

    /// Probability that a cell starts alive, between 0 and 1
    #[arg(long, default_value_t = 0.5)]
    density: f64,

    /// Seed for the initial grid; a random one is used when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Side of a cell in pixels
    #[arg(long, default_value_t = CELL_SIZE)]
    cell_size: u32,

    /// Delay between frames in hundredths of a second
    #[arg(long, default_value_t = DELAY)]
    delay: u16,

    /// Animation loop count, 0 loops forever [default: number of generations]
    #[arg(long)]
    loops: Option<u16>,

    /// Do not draw grid lines
    #[arg(long)]
    no_mesh: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output: PathBuf,
    pub generations: usize,
    pub width: usize,
    pub height: usize,
    pub density: f64,
    pub seed: Option<u64>,
    pub cell_size: u32,
    pub delay: u16,
    pub loops: Option<u16>,
    pub mesh: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("width", cli.width),
            ("height", cli.height),
            ("generations", cli.generations),
            ("cell size", cli.cell_size as usize),
        ] {
            if value == 0 {
                return Err(ConfigError::NotPositive { name });
            }
        }
        let width = (cli.width as u64).saturating_mul(cli.cell_size.into());
        let height = (cli.height as u64).saturating_mul(cli.cell_size.into());
        if width > MAX_FRAME_SIDE || height > MAX_FRAME_SIDE {
            return Err(ConfigError::FrameTooLarge { width, height });
        }

        Ok(Config {
            output: cli.output,
            generations: cli.generations,
            width: cli.width,
            height: cli.height,
            density: cli.density,
            seed: cli.seed,
            cell_size: cli.cell_size,
            delay: cli.delay,
            loops: cli.loops,
            mesh: !cli.no_mesh,
        })
    }
}
