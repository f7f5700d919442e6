//! Game constants for board size, colors and timing.

use bevy::prelude::*;

// Board dimensions, in pixels
pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;
pub const GRID_SIZE: u32 = 20;
// Largest accepted board side, in pixels
pub const MAX_BOARD_PIXELS: u32 = 8192;

// Ticks per second
pub const SPEED: u32 = 10;

pub const WINDOW_TITLE: &str = "Snake";
pub const DEFAULT_LOG_FILTER: &str = "info,wgpu=error,naga=warn";

// Colors
pub const BOARD_BACKGROUND_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 1.0);
pub const BORDER_COLOR: Color = Color::srgba(0.365, 0.847, 0.894, 1.0);
pub const APPLE_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 1.0);
pub const SNAKE_COLOR: Color = Color::srgba(0.0, 1.0, 0.0, 1.0);

// Border line width, in pixels
pub const BORDER_THICKNESS: f32 = 1.0;

// Z-index constants for rendering layers
pub const Z_CELL: f32 = 0.0;
pub const Z_CELL_BORDER: f32 = 0.1;
