//! Core game module: board geometry, the snake and apple model, shared resources,
//! events, configuration and constants.

mod apple;
mod config;
mod constants;
mod events;
mod grid;
mod resources;
mod shape;
mod snake;

pub use apple::*;
pub use config::*;
pub use constants::*;
pub use events::*;
pub use grid::*;
pub use resources::*;
pub use shape::*;
pub use snake::*;
