//! The apple and its placement on free cells.

use bevy::prelude::*;
use rand::{Rng, seq::IndexedRandom};

use super::{APPLE_COLOR, Board, Cell, Snake};

#[derive(Debug, Clone, PartialEq)]
pub struct Apple {
    position: Cell,
    body_color: Color,
}

impl Apple {
    pub fn new(position: Cell) -> Self {
        Apple {
            position,
            body_color: APPLE_COLOR,
        }
    }

    /// An apple on a uniformly random cell not covered by `snake`.
    /// `None` when the snake fills the whole board.
    pub fn spawn<R: Rng + ?Sized>(board: &Board, snake: &Snake, rng: &mut R) -> Option<Self> {
        free_cell(board, snake, rng).map(Apple::new)
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn body_color(&self) -> Color {
        self.body_color
    }

    /// Move to a random free cell. Returns false, leaving the apple in place,
    /// when no free cell remains.
    pub fn randomize_position<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        snake: &Snake,
        rng: &mut R,
    ) -> bool {
        match free_cell(board, snake, rng) {
            Some(cell) => {
                debug_assert!(board.contains(cell));
                self.position = cell;
                true
            }
            None => false,
        }
    }
}

fn free_cell<R: Rng + ?Sized>(board: &Board, snake: &Snake, rng: &mut R) -> Option<Cell> {
    let free: Vec<Cell> = board.cells().filter(|cell| !snake.occupies(*cell)).collect();
    free.choose(rng).copied()
}
