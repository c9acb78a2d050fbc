use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use thiserror::Error;

const DEFAULT_BOARD_SIZE: u32 = 400;
const DEFAULT_CELL_SIZE: u32 = 20;
const DEFAULT_TICK_RATE: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a {board}px board with {cell}px cells is only {size} cells wide, need at least 2")]
    GridTooSmall { board: u32, cell: u32, size: usize },
}

/// Terminal snake on a square grid.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Board width and height in pixels.
    #[arg(
        long,
        value_name = "PX",
        default_value_t = DEFAULT_BOARD_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub board_size: u32,
    /// Size of one cell in pixels.
    #[arg(
        long,
        value_name = "PX",
        default_value_t = DEFAULT_CELL_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub cell_size: u32,
    /// Moves per second.
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_TICK_RATE,
        value_parser = clap::value_parser!(u32).range(1..=1_000)
    )]
    pub tick_rate: u32,
    /// Seed for every random choice of the session.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
    /// Where to write the log.
    #[arg(long, value_name = "PATH", default_value = "gridsnake.log")]
    pub log_file: PathBuf,
    /// Log at debug level.
    #[arg(long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            board_size: DEFAULT_BOARD_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
            log_file: PathBuf::from("gridsnake.log"),
            verbose: false,
        }
    }
}

impl Config {
    /// Checks what clap cannot see option by option: the board has to fit
    /// at least two cells per side.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size() < 2 {
            return Err(ConfigError::GridTooSmall {
                board: self.board_size,
                cell: self.cell_size,
                size: self.grid_size(),
            });
        }
        Ok(())
    }

    /// Cells along each side of the board.
    pub fn grid_size(&self) -> usize {
        (self.board_size / self.cell_size.max(1)) as usize
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
