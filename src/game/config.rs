//! Runtime configuration and its validation.

use bevy::prelude::*;
use std::time::Duration;
use thiserror::Error;

use super::{
    Board, DEFAULT_LOG_FILTER, GRID_SIZE, MAX_BOARD_PIXELS, SCREEN_HEIGHT, SCREEN_WIDTH, SPEED,
};

/// Reasons a [`GameConfig`] cannot describe a playable board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be non-zero")]
    ZeroCellSize,
    #[error("board {axis} must be non-zero")]
    ZeroDimension { axis: &'static str },
    #[error("board {axis} of {pixels}px exceeds the {max}px limit")]
    TooLarge {
        axis: &'static str,
        pixels: u32,
        max: u32,
    },
    #[error("board {axis} of {pixels}px is not a multiple of the {cell_size}px grid size")]
    NotCellAligned {
        axis: &'static str,
        pixels: u32,
        cell_size: u32,
    },
    #[error("board has {cells} cell(s); at least 2 are needed to fit the snake and an apple")]
    TooFewCells { cells: u64 },
    #[error("speed must be at least one tick per second")]
    ZeroSpeed,
}

/// Window, board and pacing settings.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Board width in pixels
    pub screen_width: u32,
    /// Board height in pixels
    pub screen_height: u32,
    /// Side of one cell in pixels
    pub grid_size: u32,
    /// Ticks per second
    pub speed: u32,
    /// Fixed RNG seed, if reproducible apple placement is wanted
    pub seed: Option<u64>,
    /// Tracing filter handed to the log plugin
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            grid_size: GRID_SIZE,
            speed: SPEED,
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    /// Validate the settings and build the board they describe.
    pub fn board(&self) -> Result<Board, ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }

        for (axis, pixels) in [("width", self.screen_width), ("height", self.screen_height)] {
            if pixels == 0 {
                return Err(ConfigError::ZeroDimension { axis });
            }
            if pixels > MAX_BOARD_PIXELS {
                return Err(ConfigError::TooLarge {
                    axis,
                    pixels,
                    max: MAX_BOARD_PIXELS,
                });
            }
            if pixels % self.grid_size != 0 {
                return Err(ConfigError::NotCellAligned {
                    axis,
                    pixels,
                    cell_size: self.grid_size,
                });
            }
        }

        let cells = u64::from(self.screen_width / self.grid_size)
            * u64::from(self.screen_height / self.grid_size);
        if cells < 2 {
            return Err(ConfigError::TooFewCells { cells });
        }

        // Every value is at most MAX_BOARD_PIXELS here, well inside i32.
        Ok(Board::new(
            self.screen_width as i32,
            self.screen_height as i32,
            self.grid_size as i32,
        ))
    }

    /// Time between two simulation ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }
}
