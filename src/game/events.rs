//! Game events (messages).

use bevy::prelude::*;

use super::Cell;

/// Message triggered when the snake eats the apple.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct AppleEaten {
    pub position: Cell,
    pub length: usize,
}

/// Message triggered when the game starts over.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct SnakeReset {
    pub length: usize,
    pub cause: ResetCause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// The head ran into the body.
    Collision,
    /// The snake covers every cell; nowhere left for an apple.
    BoardFilled,
}
